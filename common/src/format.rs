//! 表示用フォーマット

/// ファイルサイズの単位
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

const KIB: u64 = 1024;

/// バイト数に対応する単位インデックス
///
/// `1024^k <= bytes < 1024^(k+1)` を満たす k を返す（最大単位で打ち止め）。
/// 0バイトは0。
pub fn size_unit_index(bytes: u64) -> usize {
    let mut index = 0;
    let mut threshold = KIB;
    while index + 1 < SIZE_UNITS.len() && bytes >= threshold {
        index += 1;
        threshold = match threshold.checked_mul(KIB) {
            Some(next) => next,
            None => break,
        };
    }
    index
}

/// ファイルサイズを人間向けの文字列にする
///
/// 値は小数第2位で丸め、末尾の0は出さない。
///
/// # Examples
/// ```
/// use code_smell_common::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let index = size_unit_index(bytes);
    let value = bytes as f64 / (KIB as f64).powi(index as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[index])
}

/// 先頭1文字だけ大文字にする
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
