//! Java source generation for the Balie driver program.
//!
//! Balie is a library without a command line interface, so every run writes a
//! tiny Java class whose `main` tokenizes and annotates an embedded string.
//! Java has no multi-line string literals here: each input line becomes one
//! `"<line> " +` fragment of a single concatenated expression.

use std::fmt::Write as _;

/// Imports and class preamble, up to the `String strText =` assignment.
const HEADER: &str = r#"
/* original author: David Nadeau (pythonner@gmail.com)
   original licence: GPL 2 or later
   adaptation: Arne Neumann (neumann.arne@gmail.com) */

import ca.uottawa.balie.Balie;
import ca.uottawa.balie.DisambiguationRulesNerf;
import ca.uottawa.balie.LexiconOnDisk;
import ca.uottawa.balie.LexiconOnDiskI;
import ca.uottawa.balie.NamedEntityRecognitionNerf;
import ca.uottawa.balie.NamedEntityTypeEnumMappingNerf;
import ca.uottawa.balie.PriorCorrectionNerf;
import ca.uottawa.balie.TokenList;
import ca.uottawa.balie.Tokenizer;

public class {class_name} {

    public static void Test() {
        String strText = "#;

/// Closes the string expression and runs the recognizer over it.
const FOOTER: &str = r#" " ";

        Tokenizer tokenizer = new Tokenizer(Balie.LANGUAGE_ENGLISH, true);

        LexiconOnDiskI lexicon = new LexiconOnDisk(LexiconOnDisk.Lexicon.OPEN_SOURCE_LEXICON);
        DisambiguationRulesNerf disambiguationRules = DisambiguationRulesNerf.Load();

        tokenizer.Reset();
        tokenizer.Tokenize(strText);
        TokenList alTokenList = tokenizer.GetTokenList();

        NamedEntityRecognitionNerf ner = new NamedEntityRecognitionNerf(
                alTokenList,
                lexicon,
                disambiguationRules,
                new PriorCorrectionNerf(),
                NamedEntityTypeEnumMappingNerf.values(),
                false);
        ner.RecognizeEntities();

        alTokenList = ner.GetTokenList();

        String strAnnotated = alTokenList.TokenRangeText(0, alTokenList.Size(), false, true, true, true, false, true);

        System.out.println(strAnnotated);
    }

    public static void main(String[] args) {
        Test();
    }

}
"#;

/// Escape one line for use inside a Java string literal.
///
/// Trailing `\r`/`\n` are stripped; `\` and `"` are backslash-escaped, as are
/// any CR/LF left inside the line, since Java ends a literal at either.
#[must_use]
pub fn escape_line(line: &str) -> String {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut escaped = String::with_capacity(line.len() + 8);
    for c in line.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Split `text` at `\r\n`, `\n` or a lone `\r`.
///
/// A terminator at the very end does not produce a trailing empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(end) = rest.find(['\r', '\n']) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..end]);
        let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + width..];
    }
    lines
}

/// Render every line of `text` as a `"<escaped line> " +` fragment.
#[must_use]
pub fn render_fragments(text: &str) -> String {
    let mut fragments = String::with_capacity(text.len() * 2);
    for line in split_lines(text) {
        // Writing into a String cannot fail
        let _ = writeln!(fragments, "\"{} \" +", escape_line(line));
    }
    fragments
}

/// Template for the generated driver class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaProgram {
    class_name: String,
}

impl JavaProgram {
    /// The caller is responsible for passing a valid Java identifier.
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Full Java source embedding `text`.
    #[must_use]
    pub fn render(&self, text: &str) -> String {
        let header = HEADER.replace("{class_name}", &self.class_name);
        let fragments = render_fragments(text);

        let mut source = String::with_capacity(header.len() + fragments.len() + FOOTER.len());
        source.push_str(&header);
        source.push_str(&fragments);
        source.push_str(FOOTER);
        source
    }
}
