//! Numbered pinyin → Hanyu Pinyin with tone diacritics (display only).
//!
//! Example:
//!   输入: "ni3 hao3"
//!   输出: "nǐ hǎo"
//!
//! Anything that does not look like a toned syllable is copied as-is, so this
//! never fails on malformed data from the feed.

/// Diacritic forms for tones 1–4, per base vowel.
const TONE_TABLE: [(char, [char; 4]); 6] = [
  ('a', ['ā', 'á', 'ǎ', 'à']),
  ('e', ['ē', 'é', 'ě', 'è']),
  ('i', ['ī', 'í', 'ǐ', 'ì']),
  ('o', ['ō', 'ó', 'ǒ', 'ò']),
  ('u', ['ū', 'ú', 'ǔ', 'ù']),
  ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ']),
];

/// Convert a numbered pinyin string (`"ni3 hao3"`) into tone-marked pinyin
/// (`"nǐ hǎo"`). Syllables are separated by whitespace and re-joined with a
/// single space.
pub fn render(pinyin: &str) -> String {
  if pinyin.is_empty() {
    return String::new();
  }
  pinyin
    .split_whitespace()
    .map(render_syllable)
    .collect::<Vec<_>>()
    .join(" ")
}

fn render_syllable(raw: &str) -> String {
  let syllable = normalize_umlaut(raw);
  let (base, tone) = match split_tone(&syllable) {
    Some(parts) => parts,
    None => return syllable,
  };

  // 0 and 5 are written for the neutral tone: drop the digit, no mark.
  if tone == 0 || tone == 5 || !base.iter().any(|&c| is_plain_vowel(lower(c))) {
    return base.into_iter().collect();
  }

  let lowered: Vec<char> = base.iter().map(|&c| lower(c)).collect();
  let idx = match mark_position(&lowered) {
    Some(i) => i,
    None => return base.into_iter().collect(),
  };

  let mut out = base;
  out[idx] = with_tone(out[idx], tone);
  out.into_iter().collect()
}

/// `u:` and `v` are common ASCII spellings of `ü`.
fn normalize_umlaut(syllable: &str) -> String {
  let mut out = String::with_capacity(syllable.len() + 2);
  let mut chars = syllable.chars().peekable();
  while let Some(c) = chars.next() {
    match c {
      'u' | 'U' if chars.peek() == Some(&':') => {
        chars.next();
        out.push('ü');
      }
      'v' | 'V' => out.push('ü'),
      _ => out.push(c),
    }
  }
  out
}

/// Split `letters + digit` into the letters and the tone number.
/// Returns `None` when there is no trailing digit or the letters contain
/// anything that cannot appear in a pinyin syllable.
fn split_tone(syllable: &str) -> Option<(Vec<char>, u8)> {
  let mut chars: Vec<char> = syllable.chars().collect();
  let tone = chars.last()?.to_digit(10)?;
  if tone > 5 {
    return None;
  }
  chars.pop();
  if chars.is_empty() || !chars.iter().all(|&c| is_syllable_letter(c)) {
    return None;
  }
  Some((chars, tone as u8))
}

/// Which letter carries the tone mark: a, e, o (ou), then the second vowel of
/// iu/ui, then the rightmost of i/u/ü.
fn mark_position(lowered: &[char]) -> Option<usize> {
  let find = |target: char| lowered.iter().position(|&c| c == target);
  let find_pair = |first: char, second: char| {
    lowered
      .windows(2)
      .position(|w| w[0] == first && w[1] == second)
      .map(|i| i + 1)
  };

  if let Some(i) = find('a') {
    return Some(i);
  }
  if let Some(i) = find('e') {
    return Some(i);
  }
  // Covers both "ou" and a lone "o": the first o is the one to mark.
  if let Some(i) = find('o') {
    return Some(i);
  }
  if let Some(i) = find_pair('i', 'u') {
    return Some(i);
  }
  if let Some(i) = find_pair('u', 'i') {
    return Some(i);
  }
  lowered.iter().rposition(|&c| matches!(c, 'i' | 'u' | 'ü'))
}

fn with_tone(c: char, tone: u8) -> char {
  let key = lower(c);
  let marked = TONE_TABLE
    .iter()
    .find(|(vowel, _)| *vowel == key)
    .map(|(_, forms)| forms[usize::from(tone - 1)])
    .unwrap_or(c);
  if c.is_uppercase() {
    marked.to_uppercase().next().unwrap_or(marked)
  } else {
    marked
  }
}

fn lower(c: char) -> char {
  c.to_lowercase().next().unwrap_or(c)
}

fn is_plain_vowel(c: char) -> bool {
  matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'ü')
}

fn is_syllable_letter(c: char) -> bool {
  c.is_ascii_alphabetic() || matches!(lower(c), 'ü' | 'ā' | 'ē' | 'ī' | 'ō' | 'ū' | 'ǖ')
}
