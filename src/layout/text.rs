use super::spec::LineLimit;

/// Corta a `max_chars` caracteres, sin puntos suspensivos.
pub fn clip(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Divide en líneas físicas (`\n` o `\r\n`), recorta cada una y aplica el
/// límite de caracteres y de líneas. Las líneas sobrantes se descartan.
pub fn clip_lines(text: &str, limit: LineLimit) -> Vec<String> {
    text.lines()
        .take(limit.lines)
        .map(|line| clip(line.trim(), limit.chars))
        .collect()
}
