//! Integration tests for pricelist: addressing, substitution, parsing, and
//! end-to-end PDF generation.

use pricelist::{
    collect_entries, column_index, fill_template, read_rows, stamp_template, substitute,
    write_pages, DepositType, Entry, Error, FixedColumns, LetterColumns, PageOptions,
    StampOptions,
};

// ============================================================================
// Column addressing
// ============================================================================

mod addressing {
    use super::*;

    #[test]
    fn test_spreadsheet_numbering() {
        let expected = [("A", 0), ("Z", 25), ("AA", 26), ("AJ", 35), ("AN", 39)];
        for (address, index) in expected {
            assert_eq!(
                column_index(address).unwrap(),
                index,
                "address {}",
                address
            );
        }
    }

    #[test]
    fn test_rejects_non_uppercase() {
        for bad in ["", "a", "A1", "1A"] {
            assert!(
                matches!(column_index(bad), Err(Error::InvalidAddress { .. })),
                "address {:?}",
                bad
            );
        }
    }
}

// ============================================================================
// Placeholder substitution
// ============================================================================

mod substitution {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identity_without_tokens() {
        let template = "no tokens anywhere, not even { braces } alone";
        assert_eq!(substitute(&row(&["x"]), template).unwrap(), template);
    }

    #[test]
    fn test_single_token_round_trip() {
        assert_eq!(substitute(&row(&["x"]), "${A}").unwrap(), "x");
    }

    #[test]
    fn test_atomic_failure_yields_no_output() {
        let result = substitute(&row(&["x"]), "${A} then ${B}");
        match result {
            Err(Error::IndexOutOfRange { index: 1, len: 1 }) => {}
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_lowercase_address_in_token() {
        assert!(matches!(
            substitute(&row(&["x"]), "${a}"),
            Err(Error::InvalidAddress { .. })
        ));
    }
}

// ============================================================================
// Entry parsing
// ============================================================================

mod entries {
    use super::*;

    fn compact_row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_compact_record() {
        let row = compact_row(&[
            "7", "Cola", "6 x 1.5L", "0.50", "12.00", "3.00", "1.5L", "2.00", "0.25", "Mehrweg",
        ]);
        let entry = Entry::parse_with(&row, &FixedColumns).unwrap();
        assert_eq!(entry.id, 7);
        assert_eq!(entry.title, "Cola");
        assert_eq!(entry.deposit_type, DepositType::Reusable);
    }

    #[test]
    fn test_unknown_deposit_type_fails() {
        let row = compact_row(&[
            "7", "Cola", "6 x 1.5L", "0.50", "12.00", "3.00", "1.5L", "2.00", "0.25", "Unknown",
        ]);
        assert!(matches!(
            Entry::parse_with(&row, &FixedColumns),
            Err(Error::MalformedRow { .. })
        ));
    }

    #[test]
    fn test_pipeline_drops_malformed_row_keeps_order() {
        let good = |id: &str| {
            compact_row(&[
                id, "Item", "6 x 1L", "0.50", "9.00", "3.00", "1L", "1.50", "0.15", "Einweg",
            ])
        };
        let rows = vec![
            good("1"),
            good("2"),
            compact_row(&["3", "broken"]),
            good("4"),
        ];

        let entries = collect_entries(&rows, &FixedColumns);
        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }
}

// ============================================================================
// CSV to entries
// ============================================================================

mod csv_pipeline {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_semicolon_csv_to_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Artikel;Bezeichnung;Inhalt\n\
             1;Cola;6 x 1.5L;0.50;12.00;3.00;1.5L;2.00;0.25;Mehrweg\n\
             ;;;\n\
             2;Wasser;12 x 0.7L;0.30;8.00;3.30;0.7L;0.70;0.15;einweg\n"
        )
        .unwrap();

        let rows = read_rows(file.path(), 1).unwrap();
        let entries = collect_entries(&rows, &FixedColumns);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Cola");
        assert_eq!(entries[0].deposit_type, DepositType::Reusable);
        assert_eq!(entries[1].title, "Wasser");
        assert_eq!(entries[1].deposit_type, DepositType::Disposable);
    }

    #[test]
    fn test_fill_template_uses_first_data_row() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "header;row\n7;Cola\n8;Wasser\n").unwrap();

        let text = fill_template(file.path(), 1, "Nr. ${A}: ${B}").unwrap();
        assert_eq!(text, "Nr. 7: Cola");
    }
}

// ============================================================================
// PDF output
// ============================================================================

mod pdf_output {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream, StringFormat};
    use std::io::Write;
    use std::path::Path;

    /// Build a one-page template PDF whose content stream shows `text`.
    fn write_template_pdf(path: &Path, text: &str) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::String(
                        text.as_bytes().to_vec(),
                        StringFormat::Literal,
                    )],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    fn page_text(path: &Path, page: u32) -> String {
        let doc = Document::load(path).unwrap();
        let page_id = *doc.get_pages().get(&page).unwrap();
        String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).into_owned()
    }

    #[test]
    fn test_stamp_template_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.pdf");
        let output = dir.path().join("output.pdf");
        let csv = dir.path().join("data.csv");

        write_template_pdf(&template, "Artikel ${A}: ${B}");
        std::fs::File::create(&csv)
            .unwrap()
            .write_all(b"skip;this\n7;Cola\n8;Wasser\n")
            .unwrap();

        stamp_template(
            &template,
            &output,
            &csv,
            &StampOptions {
                skip: 1,
                limit: None,
            },
        )
        .unwrap();

        let text = page_text(&output, 1);
        assert!(text.contains("Artikel 7: Cola"), "{}", text);
        assert!(!text.contains("${"), "{}", text);
    }

    #[test]
    fn test_stamp_template_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.pdf");
        let output = dir.path().join("output.pdf");
        let csv = dir.path().join("data.csv");

        write_template_pdf(&template, "${A}");
        std::fs::File::create(&csv)
            .unwrap()
            .write_all(b"only;header\n")
            .unwrap();

        let err = stamp_template(
            &template,
            &output,
            &csv,
            &StampOptions {
                skip: 1,
                limit: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::NoData));
    }

    #[test]
    fn test_stamp_template_bad_row_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.pdf");
        let output = dir.path().join("output.pdf");
        let csv = dir.path().join("data.csv");

        // Template asks for column B, the one row only has column A
        write_template_pdf(&template, "${A} ${B}");
        std::fs::File::create(&csv)
            .unwrap()
            .write_all(b"7\n")
            .unwrap();

        let err = stamp_template(&template, &output, &csv, &StampOptions::default()).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_pages_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("pricelist.pdf");
        let csv = dir.path().join("data.csv");

        std::fs::File::create(&csv)
            .unwrap()
            .write_all(
                b"1;Cola;6 x 1.5L;0.50;12.00;3.00;1.5L;2.00;0.25;Mehrweg\n\
                  bad;row\n\
                  2;Wasser;12 x 0.7L;0.30;8.00;3.30;0.7L;0.70;0.15;Einweg\n",
            )
            .unwrap();

        let rows = read_rows(&csv, 0).unwrap();
        let entries = collect_entries(&rows, &FixedColumns);
        write_pages(&entries, &output, &PageOptions::default()).unwrap();

        let doc = Document::load(&output).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
        assert!(page_text(&output, 1).contains("Cola"));
        assert!(page_text(&output, 2).contains("Wasser"));
    }

    #[test]
    fn test_pages_trailing_break() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("pricelist.pdf");

        let row: Vec<String> = [
            "1", "Cola", "6 x 1.5L", "0.50", "12.00", "3.00", "1.5L", "2.00", "0.25", "Mehrweg",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let entries = collect_entries(&[row], &FixedColumns);

        write_pages(
            &entries,
            &output,
            &PageOptions {
                trailing_blank_page: true,
            },
        )
        .unwrap();

        let doc = Document::load(&output).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }
}

// ============================================================================
// Letter-addressed pipeline over the raw export shape
// ============================================================================

mod raw_export {
    use super::*;

    fn export_row(id: &str, title: &str, deposit: &str) -> Vec<String> {
        let mut row: Vec<String> = (0..40).map(|_| String::new()).collect();
        row[0] = id.to_string();
        row[1] = title.to_string();
        row[2] = "20".to_string();
        row[3] = "0.5L".to_string();
        row[10] = "15.00".to_string();
        row[11] = "0.75".to_string();
        row[35] = "1.50".to_string();
        row[37] = "3.10".to_string();
        row[38] = "0.08".to_string();
        row[39] = deposit.to_string();
        row
    }

    #[test]
    fn test_letter_addressed_pipeline() {
        let rows = vec![
            export_row("10", "Pils", "Mehrweg"),
            export_row("11", "Limo", "nope"),
            export_row("12", "Schorle", "Einweg"),
        ];
        let entries = collect_entries(&rows, &LetterColumns);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 10);
        assert_eq!(entries[0].crate_group.contents, "20 x 0.5L");
        assert_eq!(entries[1].id, 12);
        assert_eq!(entries[1].deposit_type, DepositType::Disposable);
    }
}
