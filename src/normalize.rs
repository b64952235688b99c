use std::collections::BTreeMap;

use crate::content::ContentBlock;
use crate::error::GenerationError;

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Removes a Markdown code fence wrapped around the model's payload.
///
/// The opening fence must start the trimmed text (`` ```json `` or a bare
/// `` ``` ``, case-sensitive). When one is removed, everything from the last
/// closing fence onward is dropped. Unfenced text is only trimmed.
pub fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let inner = match trimmed
        .strip_prefix(JSON_FENCE)
        .or_else(|| trimmed.strip_prefix(FENCE))
    {
        Some(rest) => match rest.rfind(FENCE) {
            Some(end) => &rest[..end],
            None => rest,
        },
        None => trimmed,
    };
    inner.trim()
}

fn into_block(
    index: usize,
    raw: BTreeMap<String, String>,
) -> Result<Option<ContentBlock>, GenerationError> {
    let mut entries = raw.into_iter();
    let (key, value) = match (entries.next(), entries.next()) {
        (None, _) => return Ok(None),
        (Some(entry), None) => entry,
        (Some(_), Some(_)) => {
            return Err(GenerationError::MalformedPayload(format!(
                "block {index} sets more than one key"
            )))
        }
    };
    match key.as_str() {
        "title" => Ok(Some(ContentBlock::Title(value))),
        "text" => Ok(Some(ContentBlock::Text(value))),
        "code" => Ok(Some(ContentBlock::Code(value))),
        other => Err(GenerationError::MalformedPayload(format!(
            "block {index} has unknown key \"{other}\""
        ))),
    }
}

/// Blocks with no keys are skipped; anything other than exactly one
/// string-valued `title`, `text` or `code` key is rejected.
pub fn parse_blocks(raw: &str) -> Result<Vec<ContentBlock>, GenerationError> {
    let payload = strip_fences(raw);
    if payload.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let raw_blocks: Vec<BTreeMap<String, String>> = serde_json::from_str(payload)
        .map_err(|e| GenerationError::MalformedPayload(e.to_string()))?;

    let blocks = raw_blocks
        .into_iter()
        .enumerate()
        .filter_map(|(index, block)| into_block(index, block).transpose())
        .collect::<Result<Vec<_>, _>>()?;

    if blocks.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(blocks)
}
