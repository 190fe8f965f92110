/// Decoded report rows: a table of text cells
pub type Rows = Vec<Vec<String>>;

/// Decode the stored row blob (a JSON array of string arrays)
pub fn decode_rows(row_data: &[u8]) -> Result<Rows, serde_json::Error> {
    serde_json::from_slice(row_data)
}

/// Split the stored header line into cells. No trimming or unquoting is
/// applied; the line was produced by a plain comma join.
pub fn split_header(headers: &str) -> Vec<String> {
    headers.split(',').map(str::to_string).collect()
}

/// Serialize rows to CSV text, `\n` terminated, quoting only where needed.
/// Rows may differ in length.
pub fn write_csv<'a, I>(rows: I) -> Result<Vec<u8>, csv::Error>
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row)?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Rows {
        rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect()
    }

    #[test]
    fn decodes_json_rows() {
        let rows = decode_rows(br#"[["1","2","3"],["4","5","6"]]"#).unwrap();
        assert_eq!(rows, table(&[&["1", "2", "3"], &["4", "5", "6"]]));
    }

    #[test]
    fn decode_rejects_non_string_cells() {
        assert!(decode_rows(br#"[[1,2]]"#).is_err());
        assert!(decode_rows(b"not json").is_err());
    }

    #[test]
    fn header_split_is_literal() {
        assert_eq!(split_header("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_header("a, b"), vec!["a", " b"]);
        assert_eq!(split_header(""), vec![""]);
        // a quoted header cell is not treated specially
        assert_eq!(split_header("\"x,y\",z"), vec!["\"x", "y\"", "z"]);
    }

    #[test]
    fn writes_plain_rows() {
        let rows = table(&[&["a", "b", "c"], &["1", "2", "3"]]);
        let out = write_csv(&rows).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a,b,c\n1,2,3\n");
    }

    #[test]
    fn quotes_delimiters_quotes_and_newlines() {
        let rows = table(&[&["x,y", "z"], &["say \"hi\"", "two\nlines"]]);
        let out = String::from_utf8(write_csv(&rows).unwrap()).unwrap();
        assert_eq!(out, "\"x,y\",z\n\"say \"\"hi\"\"\",\"two\nlines\"\n");
    }

    #[test]
    fn accepts_ragged_rows() {
        let rows = table(&[&["a", "b", "c"], &["1"]]);
        let out = String::from_utf8(write_csv(&rows).unwrap()).unwrap();
        assert_eq!(out, "a,b,c\n1\n");
    }
}
