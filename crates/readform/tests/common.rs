#![allow(missing_docs)]
#![allow(dead_code)]

pub const ORIGINAL: &str = r#"(defn greet [name]
  {msg "say \"hi\""
   who name
   n -3.5e2})"#;

/// `ORIGINAL` as a client might receive it, cut mid-token, mid-escape and
/// mid-number.
pub const STREAM: [&str; 8] = [
    "(def",
    "n gre",
    "et [na",
    "me]\n  {msg \"say \\",
    "\"hi\\\"\"\n   who",
    " name\n   n -3",
    ".5e",
    "2})",
];

/// Several values back to back, separated only by whitespace or commas.
pub const MULTI: &str = "1 (a) [b c],{d e}\n\"f\" nil true";
