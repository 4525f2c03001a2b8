/// Dialpad key for a single character; anything without a key passes through.
pub fn dialpad_digit(ch: char) -> char {
    match ch {
        'a' | 'b' | 'c' => '2',
        'd' | 'e' | 'f' => '3',
        'g' | 'h' | 'i' => '4',
        'j' | 'k' | 'l' => '5',
        'm' | 'n' | 'o' => '6',
        'p' | 'q' | 'r' | 's' => '7',
        't' | 'u' | 'v' => '8',
        'w' | 'x' | 'y' | 'z' => '9',
        '+' => '0',
        other => other,
    }
}

/// T9 form of a lowercase name, one output character per input character.
pub fn encode_name(name: &str) -> String {
    name.chars().map(dialpad_digit).collect()
}
