//! GNU `.mo` catalog decoding.
//!
//! The format is a 28-byte header (magic, revision, string count, two
//! offset tables, hash table fields) followed by length/offset pairs
//! into a string pool. Plural entries carry NUL-joined msgid pairs and
//! NUL-joined forms; context entries use the `"<ctx>\x04<msgid>"` key
//! convention. Both byte orders are accepted.
//!
//! Decoding errors carry a reason string; the caller attaches the
//! locale/path context.

const MAGIC_LE: u32 = 0x950412de;
const MAGIC_BE: u32 = 0xde120495;
const HEADER_LEN: usize = 28;

/// One decoded catalog entry.
#[derive(Debug, Clone)]
pub(crate) enum MoEntry {
    /// Simple (or context-qualified) translation.
    Message { id: String, text: String },
    /// Pluralized translation: `ids` is `[singular, plural]`, `forms`
    /// holds one string per plural form.
    Plural { ids: Vec<String>, forms: Vec<String> },
}

/// Decode result: entries plus the `Plural-Forms:` header fields.
#[derive(Debug)]
pub(crate) struct MoFile {
    pub entries: Vec<MoEntry>,
    pub nplurals: u32,
    pub plural_expression: String,
}

pub(crate) fn decode(data: &[u8]) -> Result<MoFile, String> {
    if data.len() < HEADER_LEN {
        return Err(format!("file too short ({} bytes)", data.len()));
    }
    let magic = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let little_endian = match magic {
        MAGIC_LE => true,
        MAGIC_BE => false,
        _ => return Err(format!("bad magic number {magic:#010x}")),
    };

    let count = word(data, 8, little_endian)? as usize;
    let originals_offset = word(data, 12, little_endian)? as usize;
    let translations_offset = word(data, 16, little_endian)? as usize;

    // The header is untrusted: both descriptor tables must fit inside
    // the file before the count drives any allocation.
    let table_len = count
        .checked_mul(8)
        .ok_or_else(|| format!("entry count {count} overflows the descriptor table"))?;
    for (name, offset) in [
        ("originals", originals_offset),
        ("translations", translations_offset),
    ] {
        let fits = offset
            .checked_add(table_len)
            .is_some_and(|end| end <= data.len());
        if !fits {
            return Err(format!(
                "{name} table ({count} entries at offset {offset}) exceeds file length {}",
                data.len()
            ));
        }
    }

    let mut entries = Vec::with_capacity(count);
    let mut nplurals = 2;
    let mut plural_expression = String::new();

    for i in 0..count {
        let original = string_at(data, originals_offset + i * 8, little_endian)?;
        let translation = string_at(data, translations_offset + i * 8, little_endian)?;

        if original.is_empty() {
            // Metadata entry: headers, one per line.
            if let Some((n, expr)) = parse_plural_forms(&translation) {
                nplurals = n;
                plural_expression = expr;
            }
            continue;
        }

        if original.contains('\0') {
            entries.push(MoEntry::Plural {
                ids: original.split('\0').map(str::to_owned).collect(),
                forms: translation.split('\0').map(str::to_owned).collect(),
            });
        } else {
            entries.push(MoEntry::Message {
                id: original,
                text: translation,
            });
        }
    }

    Ok(MoFile {
        entries,
        nplurals,
        plural_expression,
    })
}

fn word(data: &[u8], offset: usize, little_endian: bool) -> Result<u32, String> {
    let bytes: [u8; 4] = data
        .get(offset..offset + 4)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| format!("offset {offset} out of bounds"))?;
    Ok(if little_endian {
        u32::from_le_bytes(bytes)
    } else {
        u32::from_be_bytes(bytes)
    })
}

/// Read the (length, offset) descriptor at `descriptor` and pull the
/// string it points at out of the pool.
fn string_at(data: &[u8], descriptor: usize, little_endian: bool) -> Result<String, String> {
    let len = word(data, descriptor, little_endian)? as usize;
    let start = word(data, descriptor + 4, little_endian)? as usize;
    let bytes = data
        .get(start..start + len)
        .ok_or_else(|| format!("string at {start}..{} out of bounds", start + len))?;
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

fn parse_plural_forms(metadata: &str) -> Option<(u32, String)> {
    let line = metadata
        .lines()
        .find(|line| line.starts_with("Plural-Forms:"))?;
    let nplurals = line
        .split("nplurals=")
        .nth(1)?
        .split(';')
        .next()?
        .trim()
        .parse()
        .ok()?;
    let expression = line
        .split("plural=")
        .nth(1)
        .map(|e| e.trim().trim_end_matches(';').to_owned())
        .unwrap_or_default();
    Some((nplurals, expression))
}

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing {
    //! `.mo` encoding for tests.

    /// Encode `(msgid, msgstr)` pairs into a little-endian `.mo` image.
    ///
    /// Plural entries join their msgids with NUL in the key and their
    /// forms with NUL in the value; context entries use the
    /// `"<ctx>\x04<msgid>"` key; a `Plural-Forms:` header travels in an
    /// empty-msgid metadata entry.
    #[must_use]
    pub fn encode_mo(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut sorted: Vec<(&str, &str)> = entries.to_vec();
        sorted.sort_by_key(|(id, _)| *id);

        let count = sorted.len() as u32;
        let originals_offset = super::HEADER_LEN as u32;
        let translations_offset = originals_offset + count * 8;
        let pool_offset = translations_offset + count * 8;

        let mut pool: Vec<u8> = Vec::new();
        let mut descriptors: Vec<(u32, u32)> = Vec::new();
        for (id, _) in &sorted {
            descriptors.push(append_string(&mut pool, pool_offset, id));
        }
        for (_, text) in &sorted {
            descriptors.push(append_string(&mut pool, pool_offset, text));
        }

        let mut out = Vec::with_capacity(pool_offset as usize + pool.len());
        out.extend_from_slice(&super::MAGIC_LE.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // revision
        out.extend_from_slice(&count.to_le_bytes());
        out.extend_from_slice(&originals_offset.to_le_bytes());
        out.extend_from_slice(&translations_offset.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // hash table size
        out.extend_from_slice(&0u32.to_le_bytes()); // hash table offset
        for (len, offset) in descriptors {
            out.extend_from_slice(&len.to_le_bytes());
            out.extend_from_slice(&offset.to_le_bytes());
        }
        out.extend_from_slice(&pool);
        out
    }

    fn append_string(pool: &mut Vec<u8>, pool_offset: u32, s: &str) -> (u32, u32) {
        let offset = pool_offset + pool.len() as u32;
        pool.extend_from_slice(s.as_bytes());
        pool.push(0);
        (s.len() as u32, offset)
    }
}
