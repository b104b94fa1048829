//! End-to-end integration tests
//!
//! These tests validate the complete import pipeline using predefined CSV
//! fixtures. Because a successful import removes its source file, every
//! fixture's input.csv is first copied into a temporary directory.
//!
//! Successful fixtures compare the created transactions (as CSV) with
//! expected.csv. Failing fixtures check the error kind, that the source file
//! survived and that nothing was written.
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path and shared categories
//! - Uncategorized rows
//! - Quoting, padding and case handling
//! - Decimal precision
//! - Validation and format errors

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use tempfile::TempDir;
    use transaction_importer::types::{NewTransaction, StoredTransaction};
    use transaction_importer::{
        import_transactions, write_transactions_csv, Balance, CategoryStore, ErrorKind,
        ImportConfig, ImportError, MemoryCategoryStore, MemoryTransactionStore, StoreError,
        TransactionImporter, TransactionStore,
    };

    /// Copy tests/fixtures/{fixture_name}/input.csv into a fresh temp dir
    fn stage_fixture(fixture_name: &str) -> (TempDir, PathBuf) {
        let input_path = format!("tests/fixtures/{}/input.csv", fixture_name);
        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let dir = TempDir::new().expect("Failed to create temp dir");
        let staged = dir.path().join("input.csv");
        fs::copy(&input_path, &staged).expect("Failed to stage fixture");
        (dir, staged)
    }

    /// Import a fixture and compare the created transactions with expected.csv
    fn run_success_fixture(fixture_name: &str) {
        let expected_path = format!("tests/fixtures/{}/expected.csv", fixture_name);
        let (_dir, staged) = stage_fixture(fixture_name);

        let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
        let created = runtime
            .block_on(import_transactions(
                &staged,
                Arc::new(MemoryCategoryStore::new()),
                Arc::new(MemoryTransactionStore::new()),
            ))
            .unwrap_or_else(|e| panic!("Failed to import {}: {}", fixture_name, e));

        let mut actual = Vec::new();
        write_transactions_csv(&created, &mut actual).expect("Failed to write output");
        let actual_output = String::from_utf8(actual).expect("Output is not UTF-8");

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
        assert!(!staged.exists(), "source file should be removed on success");
    }

    #[rstest]
    #[case("happy_path")]
    #[case("shared_categories")]
    #[case("uncategorized")]
    #[case("quoted_and_padded")]
    #[case("decimal_values")]
    fn test_success_fixtures(#[case] fixture: &str) {
        run_success_fixture(fixture);
    }

    #[rstest]
    #[case("missing_title", ErrorKind::Validation)]
    #[case("missing_value", ErrorKind::Validation)]
    #[case("invalid_type", ErrorKind::Validation)]
    #[case("invalid_value", ErrorKind::Validation)]
    #[case("unequal_columns", ErrorKind::Format)]
    #[case("malformed_quotes", ErrorKind::Format)]
    #[case("unterminated_quote", ErrorKind::Format)]
    #[case("text_after_quote", ErrorKind::Format)]
    #[case("bare_quote", ErrorKind::Format)]
    #[tokio::test]
    async fn test_failure_fixtures(#[case] fixture: &str, #[case] expected: ErrorKind) {
        let (_dir, staged) = stage_fixture(fixture);
        let categories = Arc::new(MemoryCategoryStore::new());
        let transactions = Arc::new(MemoryTransactionStore::new());

        let err = import_transactions(&staged, Arc::clone(&categories), Arc::clone(&transactions))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), expected, "unexpected error: {}", err);
        assert!(staged.exists(), "source file should be kept on failure");
        assert!(transactions.is_empty());
        assert!(categories.is_empty());
    }

    #[rstest]
    #[case("unterminated_quote", 2)]
    #[case("text_after_quote", 2)]
    #[case("bare_quote", 3)]
    #[tokio::test]
    async fn test_malformed_quoting_reports_line(#[case] fixture: &str, #[case] line: u64) {
        let (_dir, staged) = stage_fixture(fixture);

        let err = import_transactions(
            &staged,
            Arc::new(MemoryCategoryStore::new()),
            Arc::new(MemoryTransactionStore::new()),
        )
        .await
        .unwrap_err();

        assert!(
            matches!(err, ImportError::Format { line: Some(l), .. } if l == line),
            "unexpected error: {}",
            err
        );
        assert!(staged.exists());
    }

    #[tokio::test]
    async fn test_shared_categories_collapse() {
        let (_dir, staged) = stage_fixture("shared_categories");
        let categories = Arc::new(MemoryCategoryStore::new());

        let created = import_transactions(
            &staged,
            Arc::clone(&categories),
            Arc::new(MemoryTransactionStore::new()),
        )
        .await
        .unwrap();

        let titles: Vec<String> = categories
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["Food", "Job"]);
        assert_eq!(created[0].category, created[2].category);
        assert_eq!(created[1].category, created[3].category);
    }

    #[tokio::test]
    async fn test_reimport_does_not_duplicate_categories() {
        let categories = Arc::new(MemoryCategoryStore::new());
        let transactions = Arc::new(MemoryTransactionStore::new());

        let (_first_dir, first) = stage_fixture("happy_path");
        import_transactions(&first, Arc::clone(&categories), Arc::clone(&transactions))
            .await
            .unwrap();

        let (_second_dir, second) = stage_fixture("happy_path");
        let created =
            import_transactions(&second, Arc::clone(&categories), Arc::clone(&transactions))
                .await
                .unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(transactions.len(), 4);
        assert_eq!(created[0].category.as_ref().map(|c| c.id), Some(1));
        assert_eq!(created[1].category.as_ref().map(|c| c.id), Some(2));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_imports_share_categories() {
        let categories = Arc::new(MemoryCategoryStore::new());
        let transactions = Arc::new(MemoryTransactionStore::new());

        let mut staged = Vec::new();
        let mut handles = Vec::new();
        for _ in 0..6 {
            let (dir, path) = stage_fixture("shared_categories");
            let categories = Arc::clone(&categories);
            let transactions = Arc::clone(&transactions);
            let task_path = path.clone();
            handles.push(tokio::spawn(async move {
                import_transactions(&task_path, categories, transactions).await
            }));
            staged.push((dir, path));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(categories.len(), 2);
        assert_eq!(transactions.len(), 30);
        assert!(staged.iter().all(|(_, path)| !path.exists()));
    }

    /// Transaction store that rejects transactions titled "Rent"
    struct RejectingStore {
        inner: MemoryTransactionStore,
    }

    impl TransactionStore for RejectingStore {
        async fn save(&self, transaction: NewTransaction) -> Result<StoredTransaction, StoreError> {
            if transaction.title == "Rent" {
                return Err(StoreError::new("save transaction", "constraint violated"));
            }
            self.inner.save(transaction).await
        }

        async fn all(&self) -> Result<Vec<StoredTransaction>, StoreError> {
            self.inner.all().await
        }

        async fn balance(&self) -> Result<Balance, StoreError> {
            self.inner.balance().await
        }
    }

    #[tokio::test]
    async fn test_store_failure_keeps_committed_writes_and_source() {
        let (_dir, staged) = stage_fixture("happy_path");
        let categories = Arc::new(MemoryCategoryStore::new());
        let transactions = Arc::new(RejectingStore {
            inner: MemoryTransactionStore::new(),
        });

        let importer = TransactionImporter::new(
            Arc::clone(&categories),
            Arc::clone(&transactions),
            ImportConfig::default(),
        );
        let err = importer.execute(&staged).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Store);
        assert!(staged.exists());
        // Categories and the Salary row were committed before Rent failed
        assert_eq!(categories.len(), 2);
        let committed = transactions.all().await.unwrap();
        assert_eq!(committed.len(), 1);
        assert_eq!(committed[0].title, "Salary");
        assert!(categories
            .find_by_title("Housing")
            .await
            .unwrap()
            .is_some());
    }
}
