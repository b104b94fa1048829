//! Asynchronous record parser with stream interface
//!
//! Turns an async byte stream into a lazy, single-pass sequence of raw rows.
//!
//! # Design
//!
//! The RecordParser uses:
//! - csv-async for streaming CSV parsing
//! - [`QuoteCheckedReader`] to reject malformed quoting csv-async would accept
//! - futures streams for the lazy sequence interface
//!
//! Cells are returned exactly as delimited. Trimming and type coercion happen
//! later in [`crate::io::csv_format::validate_record`].
//!
//! # Architecture
//!
//! ```text
//! Byte stream → QuoteCheckedReader → RecordParser → RawRecord stream → validate_record
//! ```

use crate::config::ImportConfig;
use crate::io::quote_check::QuoteCheckedReader;
use crate::types::{ImportError, RawRecord};
use csv_async::{AsyncReaderBuilder, StringRecord};
use futures::io::AsyncRead;
use futures::stream::{self, Stream};

/// Asynchronous CSV record parser
///
/// Rows must all have the same number of fields and be quoted correctly;
/// anything else is a format error.
pub struct RecordParser<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<QuoteCheckedReader<R>>,
}

impl<R: AsyncRead + Unpin + Send> RecordParser<R> {
    /// Create a new RecordParser over `reader`
    ///
    /// When `config.has_header` is set the first row is consumed as a header
    /// and never yielded.
    pub fn new(reader: R, config: &ImportConfig) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .has_headers(config.has_header)
            .delimiter(config.delimiter)
            .flexible(false)
            .trim(csv_async::Trim::None)
            .create_reader(QuoteCheckedReader::new(reader, config.delimiter));

        Self { csv_reader }
    }

    /// Read the next row
    ///
    /// # Returns
    ///
    /// * `Ok(Some(RawRecord))` - The next row in source order
    /// * `Ok(None)` - End of stream
    /// * `Err(ImportError::Format)` - The stream is not valid delimited text
    pub async fn next_record(&mut self) -> Result<Option<RawRecord>, ImportError> {
        let mut record = StringRecord::new();
        if !self.csv_reader.read_record(&mut record).await? {
            return Ok(None);
        }

        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        Ok(Some(RawRecord {
            line,
            fields: record.iter().map(str::to_owned).collect(),
        }))
    }

    /// Consume the parser into a stream of rows
    ///
    /// The stream ends after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<RawRecord, ImportError>> + Send {
        stream::unfold(Some(self), |state| async move {
            let mut parser = state?;
            match parser.next_record().await {
                Ok(Some(record)) => Some((Ok(record), Some(parser))),
                Ok(None) => None,
                Err(e) => Some((Err(e), None)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;
    use futures::io::Cursor;
    use futures::stream::TryStreamExt;
    use rstest::rstest;

    fn parser_for(content: &'static str) -> RecordParser<Cursor<&'static [u8]>> {
        RecordParser::new(Cursor::new(content.as_bytes()), &ImportConfig::default())
    }

    #[tokio::test]
    async fn test_skips_header_and_keeps_order() {
        let mut parser = parser_for(
            "title,type,value,category\nSalary,income,5000,Job\nRent,outcome,1200,Housing\n",
        );

        let first = parser.next_record().await.unwrap().unwrap();
        assert_eq!(first.fields, vec!["Salary", "income", "5000", "Job"]);
        assert_eq!(first.line, 2);

        let second = parser.next_record().await.unwrap().unwrap();
        assert_eq!(second.fields[0], "Rent");
        assert_eq!(second.line, 3);

        assert!(parser.next_record().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_header_only_yields_nothing() {
        let mut parser = parser_for("title,type,value,category\n");
        assert!(parser.next_record().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_cells_are_not_trimmed() {
        let mut parser = parser_for("title,type,value,category\n  Salary , income ,5000,Job\n");

        let record = parser.next_record().await.unwrap().unwrap();
        assert_eq!(record.fields[0], "  Salary ");
        assert_eq!(record.fields[1], " income ");
    }

    #[tokio::test]
    async fn test_quoted_fields_keep_delimiters() {
        let mut parser =
            parser_for("title,type,value,category\n\"Rent, March\",outcome,1200,\"Housing\"\n");

        let record = parser.next_record().await.unwrap().unwrap();
        assert_eq!(record.fields[0], "Rent, March");
        assert_eq!(record.fields[3], "Housing");
    }

    #[tokio::test]
    async fn test_unequal_row_length_is_format_error() {
        let mut parser = parser_for("title,type,value,category\nSalary,income,5000\n");

        let err = parser.next_record().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[rstest]
    #[case::unterminated_quote("title,type,value,category\nSalary,income,5000,\"Job\n", 2)]
    #[case::text_after_quote("title,type,value,category\n\"Rent\"x,outcome,1200,Housing\n", 2)]
    #[case::bare_quote("title,type,value,category\nRe\"nt,outcome,1200,Housing\n", 2)]
    #[case::after_valid_rows(
        "title,type,value,category\na,income,1,x\nb,income,2,y\nc,inc\"ome,3,z\n",
        4
    )]
    #[tokio::test]
    async fn test_malformed_quoting_is_format_error(
        #[case] content: &'static str,
        #[case] line: u64,
    ) {
        let mut parser = parser_for(content);

        let err = loop {
            match parser.next_record().await {
                Ok(Some(_)) => continue,
                Ok(None) => panic!("malformed input parsed without error"),
                Err(e) => break e,
            }
        };

        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(
            matches!(err, ImportError::Format { line: Some(l), .. } if l == line),
            "unexpected error: {}",
            err
        );
    }

    #[tokio::test]
    async fn test_escaped_quotes_are_unescaped() {
        let mut parser =
            parser_for("title,type,value,category\n\"Dinner \"\"out\"\"\",outcome,60,Food\n");

        let record = parser.next_record().await.unwrap().unwrap();
        assert_eq!(record.fields[0], "Dinner \"out\"");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_format_error() {
        let bytes: &'static [u8] = b"title,type,value,category\n\xff\xfe,income,1,Food\n";
        let mut parser = RecordParser::new(Cursor::new(bytes), &ImportConfig::default());

        let err = parser.next_record().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[tokio::test]
    async fn test_without_header_first_row_is_data() {
        let config = ImportConfig {
            has_header: false,
            delimiter: b';',
        };
        let bytes: &'static [u8] = b"Salary;income;5000;Job\n";
        let mut parser = RecordParser::new(Cursor::new(bytes), &config);

        let record = parser.next_record().await.unwrap().unwrap();
        assert_eq!(record.fields, vec!["Salary", "income", "5000", "Job"]);
        assert_eq!(record.line, 1);
    }

    #[tokio::test]
    async fn test_into_stream_collects_all_rows() {
        let parser =
            parser_for("title,type,value,category\na,income,1,x\nb,income,2,y\nc,outcome,3,z\n");

        let titles: Vec<String> = parser
            .into_stream()
            .map_ok(|record| record.fields[0].clone())
            .try_collect()
            .await
            .unwrap();

        assert_eq!(titles, vec!["a", "b", "c"]);
    }
}
