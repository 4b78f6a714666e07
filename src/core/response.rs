//! Message length helpers for Discord replies
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Character-based truncation for picker labels and result messages
//! - 1.0.0: Message chunking and truncation

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;
/// Characters of styled text shown in a picker label before the ellipsis
pub const LABEL_PREVIEW_CHARS: usize = 20;
/// Discord select menu option label/description limit
pub const OPTION_TEXT_LIMIT: usize = 100;

/// Split text into chunks of at most `max_size` bytes, preferring line breaks
/// and never splitting inside a UTF-8 character.
pub fn chunk_text(text: &str, max_size: usize) -> Vec<String> {
    if text.len() <= max_size {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if !current.is_empty() && current.len() + line.len() + 1 > max_size {
            chunks.push(std::mem::take(&mut current));
        }

        if line.len() > max_size {
            let mut pieces = split_at_char_boundaries(line, max_size);
            if let Some(last) = pieces.pop() {
                chunks.extend(pieces);
                current = last;
            }
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn split_at_char_boundaries(line: &str, max_size: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if current.len() + ch.len_utf8() > max_size && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Chunk text for message content (2000 byte limit)
pub fn chunk_for_message(text: &str) -> Vec<String> {
    chunk_text(text, MESSAGE_LIMIT)
}

/// Truncate text to at most `max_chars` characters, ellipsis included.
/// Discord counts message length in characters.
pub fn truncate_to_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let cut = text.char_indices().nth(keep).map_or(text.len(), |(i, _)| i);
    format!("{}...", &text[..cut])
}

/// Keep the first `max_chars` characters, appending `...` when anything was cut
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
