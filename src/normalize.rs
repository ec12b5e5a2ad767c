use crate::errors::AppError;
use crate::models::Card;

const REQUIRED_HEADERS: [&str; 3] = ["id", "question", "answer"];

/// Converts sheet rows into cards.
///
/// The first row is the header; `id`, `question` and `answer` are located by
/// trimmed, case-insensitive match. Rows shorter than the header read as if
/// padded with empty cells, and rows whose three fields are all blank are
/// skipped. Fewer than two rows yields no cards.
pub fn normalize_rows<S: AsRef<str>>(values: &[Vec<S>]) -> Result<Vec<Card>, AppError> {
    let [header, rows @ ..] = values else {
        return Ok(Vec::new());
    };
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let header: Vec<String> = header
        .iter()
        .map(|h| h.as_ref().trim().to_lowercase())
        .collect();
    let col_index = |name: &str| header.iter().position(|h| h == name);

    let (Some(id_i), Some(q_i), Some(a_i)) = (
        col_index(REQUIRED_HEADERS[0]),
        col_index(REQUIRED_HEADERS[1]),
        col_index(REQUIRED_HEADERS[2]),
    ) else {
        return Err(AppError::Schema(format!(
            "Sheet must include headers: {} (row 1). Found: [{}]",
            REQUIRED_HEADERS.join(", "),
            header.join(", ")
        )));
    };

    let cell = |row: &[S], i: usize| -> String {
        row.get(i)
            .map(|c| c.as_ref().trim().to_string())
            .unwrap_or_default()
    };

    let cards = rows
        .iter()
        .filter_map(|row| {
            let id = cell(row.as_slice(), id_i);
            let question = cell(row.as_slice(), q_i);
            let answer = cell(row.as_slice(), a_i);

            if id.is_empty() && question.is_empty() && answer.is_empty() {
                return None;
            }
            Some(Card {
                id,
                question,
                answer,
            })
        })
        .collect();

    Ok(cards)
}

/// Renders a raw cell value the way it reads in the sheet.
pub fn cell_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
