//! Word-boundary classification and motion.
//!
//! Characters fall into three lexical classes and word motion stops at
//! class boundaries, with whitespace acting as a separator that resets the
//! scan. Motions return `None` when they run off the buffer; the caller
//! clamps to the buffer edge.

use crate::traits::TextOps;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Sentinel matching no real character class.
    None,
    Space,
    Special,
    Word,
}

pub fn classify(ch: char) -> CharClass {
    match ch {
        ' ' | '\t' | '\n' => CharClass::Space,
        '"' | '\'' | '(' | ')' | '{' | '}' | '[' | ']' | '<' | '>' | '-' | '+' | '*' | '/'
        | '!' | '@' | '#' | '$' | '%' | '^' | '&' | ':' | ';' | '?' | '|' | '=' | '\\' | '.'
        | ',' | '_' => CharClass::Special,
        _ => CharClass::Word,
    }
}

/// Offset of the next word boundary after `offset`.
///
/// Starting on whitespace lands on the first following non-space
/// character. Otherwise the scan runs while the class stays equal to the
/// starting class; whitespace crossed mid-scan resets the comparison class
/// so the scan stops at the next non-space character instead.
pub fn forward_word<T: TextOps + ?Sized>(buffer: &T, offset: usize) -> Option<usize> {
    let len = buffer.char_count();
    if offset >= len {
        return None;
    }

    let mut pos = offset;
    let mut begin_class = classify(buffer.char_at(pos)?);

    if begin_class == CharClass::Space {
        loop {
            pos += 1;
            if pos >= len {
                return None;
            }
            if classify(buffer.char_at(pos)?) != CharClass::Space {
                return Some(pos);
            }
        }
    }

    loop {
        pos += 1;
        if pos >= len {
            return None;
        }
        let cur_class = classify(buffer.char_at(pos)?);

        if cur_class == CharClass::Space {
            begin_class = CharClass::None;
            continue;
        }
        if cur_class != begin_class {
            return Some(pos);
        }
    }
}

/// Offset of the previous word boundary before `offset`.
///
/// Steps back over any whitespace first, then keeps stepping back while
/// the class matches, finally landing just past the boundary.
pub fn backward_word<T: TextOps + ?Sized>(buffer: &T, offset: usize) -> Option<usize> {
    let mut pos = offset.checked_sub(1)?;

    if classify(buffer.char_at(pos)?) == CharClass::Space {
        loop {
            pos = pos.checked_sub(1)?;
            if classify(buffer.char_at(pos)?) != CharClass::Space {
                break;
            }
        }
    }

    let begin_class = classify(buffer.char_at(pos)?);
    loop {
        pos = pos.checked_sub(1)?;
        if classify(buffer.char_at(pos)?) != begin_class {
            return Some(pos + 1);
        }
    }
}
