//! File format inference.
//!
//! Three strategies tried in order of increasing cost: extension-to-MIME
//! lookup, content sniffing over the leading bytes, raw extension
//! fallback. The first strategy to answer wins, so a mislabeled extension
//! beats the file's actual content. That trade (cheap first, not
//! confident first) is deliberate.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Tag identifying a file's data format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatTag {
    Csv,
    Xlsx,
    Json,
    /// Anything the loader does not support, carried verbatim for error
    /// messages.
    Other(String),
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Xlsx => write!(f, "xlsx"),
            Self::Json => write!(f, "json"),
            Self::Other(tag) => write!(f, "{tag}"),
        }
    }
}

const SPREADSHEET_SUBTYPE: &str = "vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Static extension-to-MIME table standing in for the OS registry.
fn mime_for_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "csv" => Some("text/csv"),
        "tsv" => Some("text/tab-separated-values"),
        "json" => Some("application/json"),
        "xlsx" => Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        "xls" => Some("application/vnd.ms-excel"),
        "txt" => Some("text/plain"),
        "xml" => Some("text/xml"),
        "html" | "htm" => Some("text/html"),
        "pdf" => Some("application/pdf"),
        "zip" => Some("application/zip"),
        "gz" => Some("application/gzip"),
        _ => None,
    }
}

fn tag_for_subtype(subtype: &str) -> FormatTag {
    match subtype {
        "csv" => FormatTag::Csv,
        "json" => FormatTag::Json,
        SPREADSHEET_SUBTYPE => FormatTag::Xlsx,
        other => FormatTag::Other(other.to_string()),
    }
}

/// Tier 1: MIME lookup keyed on the file extension; the subtype portion
/// of the MIME type becomes the tag. Unknown extensions yield no answer.
fn from_mime_lookup(path: &Path) -> Option<FormatTag> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = mime_for_extension(&extension)?;
    let (_, subtype) = mime.split_once('/')?;
    Some(tag_for_subtype(subtype))
}

/// Tier 2: sniff the leading bytes for known signatures, independent of
/// the extension. Unreadable or unrecognized content yields no answer.
fn from_content(path: &Path) -> Option<FormatTag> {
    let mut head = [0_u8; 512];
    let mut file = File::open(path).ok()?;
    let read = file.read(&mut head).ok()?;
    let head = &head[..read];

    if head.starts_with(b"PK\x03\x04") {
        // ZIP container; XLSX is the only zipped format we load.
        return Some(FormatTag::Xlsx);
    }
    if head.starts_with(b"%PDF") {
        return Some(FormatTag::Other("pdf".to_string()));
    }
    if head.starts_with(&[0x1F, 0x8B]) {
        return Some(FormatTag::Other("gz".to_string()));
    }
    let text = head.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(head);
    let first = text
        .iter()
        .copied()
        .find(|byte| !byte.is_ascii_whitespace())?;
    if first == b'{' || first == b'[' {
        return Some(FormatTag::Json);
    }
    None
}

/// Tier 3: the substring after the last dot of the file name, lowercased.
/// A dotless name is returned whole.
fn from_extension_fallback(path: &Path) -> FormatTag {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tail = name.rsplit('.').next().unwrap_or(&name).to_ascii_lowercase();
    match tail.as_str() {
        "csv" => FormatTag::Csv,
        "xlsx" => FormatTag::Xlsx,
        "json" => FormatTag::Json,
        _ => FormatTag::Other(tail),
    }
}

const STRATEGIES: [fn(&Path) -> Option<FormatTag>; 2] = [from_mime_lookup, from_content];

/// Infers the format of the file at `path`.
pub fn infer_format(path: &Path) -> FormatTag {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(path))
        .unwrap_or_else(|| from_extension_fallback(path))
}
