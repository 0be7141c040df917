//! Locale display conventions: separators and symbol placement.
//!
//! This is a deliberately small convention table, not an ICU replacement.
//! Tags accept either `_` or `-` as the subtag separator.

/// Where the currency symbol sits relative to the formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolPosition {
    /// `$1,234.56`
    Before,
    /// `€ 1.234,56` (before, space-separated)
    BeforeSpaced,
    /// `1.234,56 €` (after, space-separated)
    AfterSpaced,
}

/// Display conventions for one locale tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Language/region tag, e.g. `"en_US"`.
    pub tag: &'static str,
    /// Separator between major and minor units.
    pub decimal_separator: char,
    /// Thousands grouping separator.
    pub grouping_separator: char,
    /// Symbol placement.
    pub symbol_position: SymbolPosition,
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag)
    }
}

macro_rules! locales {
    ($($ident:ident => ($tag:literal, $dec:literal, $grp:literal, $pos:ident)),* $(,)?) => {
        $(
            pub const $ident: Locale = Locale {
                tag: $tag,
                decimal_separator: $dec,
                grouping_separator: $grp,
                symbol_position: SymbolPosition::$pos,
            };
        )*

        /// The bundled locale set.
        pub static TAGS: &[&Locale] = &[$(&$ident),*];
    };
}

locales! {
    DE_DE => ("de_DE", ',', '.', AfterSpaced),
    EN_AU => ("en_AU", '.', ',', Before),
    EN_GB => ("en_GB", '.', ',', Before),
    EN_US => ("en_US", '.', ',', Before),
    ES_ES => ("es_ES", ',', '.', AfterSpaced),
    FR_FR => ("fr_FR", ',', ' ', AfterSpaced),
    JA_JP => ("ja_JP", '.', ',', Before),
    NL_NL => ("nl_NL", ',', '.', BeforeSpaced),
    PT_BR => ("pt_BR", ',', '.', BeforeSpaced),
    SV_SE => ("sv_SE", ',', ' ', AfterSpaced),
}

fn tag_matches(candidate: &str, tag: &str) -> bool {
    candidate.len() == tag.len()
        && candidate
            .chars()
            .zip(tag.chars())
            .all(|(a, b)| a.eq_ignore_ascii_case(&b) || (a == '-' && b == '_'))
}

/// Look up a bundled locale by tag; `en-US` and `en_US` both match.
pub fn find(tag: &str) -> Option<&'static Locale> {
    TAGS.iter().copied().find(|l| tag_matches(tag.trim(), l.tag))
}

/// Resolve a tag to conventions, falling back to `en_US` for unknown tags.
///
/// Matches the permissive behavior of locale services that degrade to a root
/// locale rather than reject unrecognized tags.
pub fn resolve(tag: &str) -> &'static Locale {
    find(tag).unwrap_or(&EN_US)
}
