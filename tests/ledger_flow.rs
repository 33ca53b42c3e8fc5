use chrono::NaiveDate;
use kas_core::{
    access::{ensure_can_write, Role},
    export,
    import,
    ledger::{
        TaxonomyTags, TransactionDraft, TransactionKind, TransactionStatus, TransactionStore,
    },
    options::{OptionRegistry, TaxonomyKey},
    report,
    storage::{JsonStorage, StorageBackend},
    workbook::{CsvWorkbook, WorkbookCodec},
    LedgerError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn income_draft(code: String, d: NaiveDate, amount: u64) -> TransactionDraft {
    TransactionDraft {
        code,
        date: d,
        amount,
        status: TransactionStatus::Settled,
        tags: TaxonomyTags::Income {
            fund_source: "Proyek Freelance".into(),
            category: "Pendapatan Tidak Tetap".into(),
            account: "Bank Jago".into(),
        },
        note: String::new(),
    }
}

#[test]
fn transactions_survive_a_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(dir.path()).unwrap();

    let mut store = TransactionStore::open(TransactionKind::Income, storage.clone());
    let d = date(2024, 8, 15);
    let created = store
        .create(income_draft(store.next_code(d), d, 750_000))
        .unwrap();

    let reopened = TransactionStore::open(TransactionKind::Income, storage);
    assert_eq!(reopened.list(), vec![created]);
}

#[test]
fn corrupt_snapshot_recovers_to_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("penerimaan.json"), "]]not json[[").unwrap();

    let storage = JsonStorage::new(dir.path()).unwrap();
    let store = TransactionStore::open(TransactionKind::Income, storage.clone());
    assert!(store.is_empty());
    // The corrupt file is discarded, so the next open is clean too.
    assert!(!dir.path().join("penerimaan.json").exists());

    let loaded: Vec<kas_core::ledger::Transaction> = storage.load("penerimaan");
    assert!(loaded.is_empty());
}

#[test]
fn csv_import_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(dir.path()).unwrap();
    let mut store = TransactionStore::open(TransactionKind::Expense, storage);

    let csv = b"Tanggal,ID Transaksi,Rekanan,Jumlah,Status,Kategori,Akun,Keterangan\n\
15/08/2024,DK20240815-001,PLN,250000,Lunas,Tagihan,Bank BCA,Listrik Agustus\n\
2024-08-16,,Superindo,120000,,Kebutuhan Pokok,Tunai,\n";
    let rows = CsvWorkbook.read_workbook(csv).unwrap();
    let count = import::run(&mut store, &rows).unwrap();
    assert_eq!(count, 2);

    let records = store.list();
    assert_eq!(records[0].date, date(2024, 8, 15));
    assert_eq!(records[0].status, TransactionStatus::Settled);
    assert_eq!(records[1].status, TransactionStatus::Pending);
    assert!(records[1].code.starts_with("IMP-E-"));
}

#[test]
fn failed_import_leaves_prior_collection_intact() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(dir.path()).unwrap();
    let mut store = TransactionStore::open(TransactionKind::Income, storage);
    let d = date(2024, 1, 1);
    store
        .create(income_draft(store.next_code(d), d, 10_000))
        .unwrap();
    let before = store.list();

    let csv = b"Tanggal,Sumber Dana,Jumlah\n\
15/08/2024,Gaji Bulanan,50000\n\
16/08/2024,Gaji Bulanan,lima puluh ribu\n";
    let rows = CsvWorkbook.read_workbook(csv).unwrap();
    let err = import::run(&mut store, &rows).expect_err("row 3 has a bad amount");
    assert!(matches!(err, LedgerError::InvalidAmount { row: 3 }));
    assert_eq!(store.list(), before);
}

#[test]
fn export_report_and_reimport_round_trip_through_csv() {
    let mut incomes = Vec::new();
    let mut expenses = Vec::new();

    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(dir.path()).unwrap();
    let mut income_store = TransactionStore::open(TransactionKind::Income, storage.clone());
    let mut expense_store = TransactionStore::open(TransactionKind::Expense, storage);

    let d1 = date(2024, 1, 10);
    incomes.push(
        income_store
            .create(income_draft(income_store.next_code(d1), d1, 100))
            .unwrap(),
    );
    let d2 = date(2024, 2, 5);
    incomes.push(
        income_store
            .create(income_draft(income_store.next_code(d2), d2, 50))
            .unwrap(),
    );
    expenses.push(
        expense_store
            .create(TransactionDraft {
                code: expense_store.next_code(d1),
                date: d1,
                amount: 30,
                status: TransactionStatus::Settled,
                tags: TaxonomyTags::Expense {
                    counterparty: "PLN".into(),
                    category: "Tagihan".into(),
                    account: "Tunai".into(),
                },
                note: String::new(),
            })
            .unwrap(),
    );

    let rollup = report::monthly_balance(&incomes, &expenses);
    assert_eq!(rollup[0].running_balance, 120);
    assert_eq!(rollup[1].net, 70);

    let bytes = CsvWorkbook
        .write_workbook(&export::balance_rows(&rollup), "Laporan_Saldo_Bulanan")
        .unwrap();
    let back = CsvWorkbook.read_workbook(&bytes).unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(back[0].get("Saldo Akhir").as_number(), Some(120.0));

    // Exported transactions re-import into an identical collection shape.
    let income_rows = export::income_rows(&incomes);
    let reimported = import::import_rows(TransactionKind::Income, &income_rows).unwrap();
    assert_eq!(reimported.len(), incomes.len());
    assert_eq!(reimported[0].amount, incomes[0].amount);
}

#[test]
fn registry_sees_values_that_exist_only_in_ledger_data() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(dir.path()).unwrap();
    let mut store = TransactionStore::open(TransactionKind::Income, storage.clone());
    let d = date(2024, 3, 3);
    store
        .create(income_draft(store.next_code(d), d, 5))
        .unwrap();

    let registry = OptionRegistry::open(storage);
    let options = registry.options(&store.list(), &[]);
    assert!(options[&TaxonomyKey::FundSource].contains(&"Proyek Freelance".to_string()));
    assert!(options[&TaxonomyKey::Account].contains(&"Bank Jago".to_string()));
}

#[test]
fn write_gate_blocks_standard_role_at_the_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonStorage::new(dir.path()).unwrap();
    let mut store = TransactionStore::open(TransactionKind::Income, storage);

    let attempt = ensure_can_write(Role::User).and_then(|_| {
        let d = date(2024, 8, 15);
        store
            .create(income_draft(store.next_code(d), d, 1))
            .map(|_| ())
    });
    assert!(matches!(attempt, Err(LedgerError::PermissionDenied)));
    assert!(store.is_empty());
}
