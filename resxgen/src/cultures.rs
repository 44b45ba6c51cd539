//! Embedded culture table and culture-suffix detection.
//!
//! The table is a curated subset of the Windows locale registry: neutral
//! languages, script-level neutrals (`zh-Hans`, `sr-Cyrl`, ...), the
//! specific cultures underneath them, and the `qps-*` pseudo-locales.
//! Locales without an assigned LCID are omitted.
//!
//! Two derived indexes are built once at startup and are read-only
//! afterwards, so they are safe for unsynchronized concurrent reads:
//! a case-insensitive tag index, and a parent LCID → specific children
//! map used by [`crate::lookup`] to synthesize fallback dispatch.

use std::collections::HashMap;

use lazy_static::lazy_static;
use unic_langid::LanguageIdentifier;

/// One row of the culture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CultureDef {
    /// Canonical tag, e.g. `da-DK`.
    pub tag: &'static str,
    /// Windows locale identifier.
    pub lcid: u32,
    /// Immediate parent tag; empty for top-level neutrals.
    pub parent: &'static str,
    /// Neutral cultures never appear as children in the descendants map.
    pub neutral: bool,
}

const fn n(tag: &'static str, lcid: u32) -> CultureDef {
    CultureDef {
        tag,
        lcid,
        parent: "",
        neutral: true,
    }
}

const fn script(tag: &'static str, lcid: u32, parent: &'static str) -> CultureDef {
    CultureDef {
        tag,
        lcid,
        parent,
        neutral: true,
    }
}

const fn c(tag: &'static str, lcid: u32, parent: &'static str) -> CultureDef {
    CultureDef {
        tag,
        lcid,
        parent,
        neutral: false,
    }
}

#[rustfmt::skip]
pub const CULTURES: &[CultureDef] = &[
    // Neutral languages.
    n("af", 0x36), n("am", 0x5E), n("ar", 0x01), n("as", 0x4D), n("az", 0x2C),
    n("be", 0x23), n("bg", 0x02), n("bn", 0x45), n("bo", 0x51), n("br", 0x7E),
    n("bs", 0x781A), n("ca", 0x03), n("cs", 0x05), n("cy", 0x52), n("da", 0x06),
    n("de", 0x07), n("el", 0x08), n("en", 0x09), n("es", 0x0A), n("et", 0x25),
    n("eu", 0x2D), n("fa", 0x29), n("fi", 0x0B), n("fil", 0x64), n("fo", 0x38),
    n("fr", 0x0C), n("ga", 0x3C), n("gd", 0x91), n("gl", 0x56), n("gu", 0x47),
    n("ha", 0x68), n("he", 0x0D), n("hi", 0x39), n("hr", 0x1A), n("hu", 0x0E),
    n("hy", 0x2B), n("id", 0x21), n("ig", 0x70), n("is", 0x0F), n("it", 0x10),
    n("ja", 0x11), n("ka", 0x37), n("kk", 0x3F), n("km", 0x53), n("kn", 0x4B),
    n("ko", 0x12), n("kok", 0x57), n("ky", 0x40), n("lb", 0x6E), n("lo", 0x54),
    n("lt", 0x27), n("lv", 0x26), n("mi", 0x81), n("mk", 0x2F), n("ml", 0x4C),
    n("mn", 0x50), n("mr", 0x4E), n("ms", 0x3E), n("mt", 0x3A), n("my", 0x55),
    n("ne", 0x61), n("nl", 0x13), n("no", 0x14), n("or", 0x48), n("pa", 0x46),
    n("pl", 0x15), n("ps", 0x63), n("pt", 0x16), n("rm", 0x17), n("ro", 0x18),
    n("ru", 0x19), n("rw", 0x87), n("sa", 0x4F), n("se", 0x3B), n("si", 0x5B),
    n("sk", 0x1B), n("sl", 0x24), n("sq", 0x1C), n("sr", 0x7C1A), n("sv", 0x1D),
    n("sw", 0x41), n("ta", 0x49), n("te", 0x4A), n("tg", 0x28), n("th", 0x1E),
    n("tk", 0x42), n("tn", 0x32), n("tr", 0x1F), n("tt", 0x44), n("ug", 0x80),
    n("uk", 0x22), n("ur", 0x20), n("uz", 0x43), n("vi", 0x2A), n("wo", 0x88),
    n("xh", 0x34), n("yo", 0x6A), n("zh", 0x7804), n("zu", 0x35),

    // Script-level neutrals.
    script("az-Cyrl", 0x742C, "az"), script("az-Latn", 0x782C, "az"),
    script("bs-Cyrl", 0x641A, "bs"), script("bs-Latn", 0x681A, "bs"),
    script("ha-Latn", 0x7C68, "ha"),
    script("mn-Cyrl", 0x7850, "mn"), script("mn-Mong", 0x7C50, "mn"),
    script("nb", 0x7C14, "no"), script("nn", 0x7814, "no"),
    script("sr-Cyrl", 0x6C1A, "sr"), script("sr-Latn", 0x701A, "sr"),
    script("tg-Cyrl", 0x7C28, "tg"),
    script("uz-Cyrl", 0x7843, "uz"), script("uz-Latn", 0x7C43, "uz"),
    script("zh-Hans", 0x0004, "zh"), script("zh-Hant", 0x7C04, "zh"),

    // Specific cultures.
    c("af-ZA", 0x0436, "af"), c("am-ET", 0x045E, "am"),
    c("ar-SA", 0x0401, "ar"), c("ar-IQ", 0x0801, "ar"), c("ar-EG", 0x0C01, "ar"),
    c("ar-LY", 0x1001, "ar"), c("ar-DZ", 0x1401, "ar"), c("ar-MA", 0x1801, "ar"),
    c("ar-TN", 0x1C01, "ar"), c("ar-OM", 0x2001, "ar"), c("ar-YE", 0x2401, "ar"),
    c("ar-SY", 0x2801, "ar"), c("ar-JO", 0x2C01, "ar"), c("ar-LB", 0x3001, "ar"),
    c("ar-KW", 0x3401, "ar"), c("ar-AE", 0x3801, "ar"), c("ar-BH", 0x3C01, "ar"),
    c("ar-QA", 0x4001, "ar"),
    c("as-IN", 0x044D, "as"),
    c("az-Cyrl-AZ", 0x082C, "az-Cyrl"), c("az-Latn-AZ", 0x042C, "az-Latn"),
    c("be-BY", 0x0423, "be"), c("bg-BG", 0x0402, "bg"),
    c("bn-BD", 0x0845, "bn"), c("bn-IN", 0x0445, "bn"),
    c("bo-CN", 0x0451, "bo"), c("br-FR", 0x047E, "br"),
    c("bs-Cyrl-BA", 0x201A, "bs-Cyrl"), c("bs-Latn-BA", 0x141A, "bs-Latn"),
    c("ca-ES", 0x0403, "ca"), c("cs-CZ", 0x0405, "cs"), c("cy-GB", 0x0452, "cy"),
    c("da-DK", 0x0406, "da"),
    c("de-DE", 0x0407, "de"), c("de-CH", 0x0807, "de"), c("de-AT", 0x0C07, "de"),
    c("de-LU", 0x1007, "de"), c("de-LI", 0x1407, "de"),
    c("el-GR", 0x0408, "el"),
    c("en-US", 0x0409, "en"), c("en-GB", 0x0809, "en"), c("en-AU", 0x0C09, "en"),
    c("en-CA", 0x1009, "en"), c("en-NZ", 0x1409, "en"), c("en-IE", 0x1809, "en"),
    c("en-ZA", 0x1C09, "en"), c("en-JM", 0x2009, "en"), c("en-BZ", 0x2809, "en"),
    c("en-TT", 0x2C09, "en"), c("en-ZW", 0x3009, "en"), c("en-PH", 0x3409, "en"),
    c("en-IN", 0x4009, "en"), c("en-MY", 0x4409, "en"), c("en-SG", 0x4809, "en"),
    c("es-MX", 0x080A, "es"), c("es-ES", 0x0C0A, "es"), c("es-GT", 0x100A, "es"),
    c("es-CR", 0x140A, "es"), c("es-PA", 0x180A, "es"), c("es-DO", 0x1C0A, "es"),
    c("es-VE", 0x200A, "es"), c("es-CO", 0x240A, "es"), c("es-PE", 0x280A, "es"),
    c("es-AR", 0x2C0A, "es"), c("es-EC", 0x300A, "es"), c("es-CL", 0x340A, "es"),
    c("es-UY", 0x380A, "es"), c("es-PY", 0x3C0A, "es"), c("es-BO", 0x400A, "es"),
    c("es-SV", 0x440A, "es"), c("es-HN", 0x480A, "es"), c("es-NI", 0x4C0A, "es"),
    c("es-PR", 0x500A, "es"), c("es-US", 0x540A, "es"),
    c("et-EE", 0x0425, "et"), c("eu-ES", 0x042D, "eu"), c("fa-IR", 0x0429, "fa"),
    c("fi-FI", 0x040B, "fi"), c("fil-PH", 0x0464, "fil"), c("fo-FO", 0x0438, "fo"),
    c("fr-FR", 0x040C, "fr"), c("fr-BE", 0x080C, "fr"), c("fr-CA", 0x0C0C, "fr"),
    c("fr-CH", 0x100C, "fr"), c("fr-LU", 0x140C, "fr"), c("fr-MC", 0x180C, "fr"),
    c("ga-IE", 0x083C, "ga"), c("gd-GB", 0x0491, "gd"), c("gl-ES", 0x0456, "gl"),
    c("gu-IN", 0x0447, "gu"), c("ha-Latn-NG", 0x0468, "ha-Latn"),
    c("he-IL", 0x040D, "he"), c("hi-IN", 0x0439, "hi"),
    c("hr-HR", 0x041A, "hr"), c("hr-BA", 0x101A, "hr"),
    c("hu-HU", 0x040E, "hu"), c("hy-AM", 0x042B, "hy"), c("id-ID", 0x0421, "id"),
    c("ig-NG", 0x0470, "ig"), c("is-IS", 0x040F, "is"),
    c("it-IT", 0x0410, "it"), c("it-CH", 0x0810, "it"),
    c("ja-JP", 0x0411, "ja"), c("ka-GE", 0x0437, "ka"), c("kk-KZ", 0x043F, "kk"),
    c("km-KH", 0x0453, "km"), c("kn-IN", 0x044B, "kn"), c("ko-KR", 0x0412, "ko"),
    c("kok-IN", 0x0457, "kok"), c("ky-KG", 0x0440, "ky"), c("lb-LU", 0x046E, "lb"),
    c("lo-LA", 0x0454, "lo"), c("lt-LT", 0x0427, "lt"), c("lv-LV", 0x0426, "lv"),
    c("mi-NZ", 0x0481, "mi"), c("mk-MK", 0x042F, "mk"), c("ml-IN", 0x044C, "ml"),
    c("mn-MN", 0x0450, "mn-Cyrl"), c("mr-IN", 0x044E, "mr"),
    c("ms-MY", 0x043E, "ms"), c("ms-BN", 0x083E, "ms"),
    c("mt-MT", 0x043A, "mt"), c("my-MM", 0x0455, "my"),
    c("nb-NO", 0x0414, "nb"), c("nn-NO", 0x0814, "nn"),
    c("ne-NP", 0x0461, "ne"),
    c("nl-NL", 0x0413, "nl"), c("nl-BE", 0x0813, "nl"),
    c("or-IN", 0x0448, "or"), c("pa-IN", 0x0446, "pa"), c("pl-PL", 0x0415, "pl"),
    c("ps-AF", 0x0463, "ps"),
    c("pt-BR", 0x0416, "pt"), c("pt-PT", 0x0816, "pt"),
    c("rm-CH", 0x0417, "rm"), c("ro-RO", 0x0418, "ro"), c("ru-RU", 0x0419, "ru"),
    c("rw-RW", 0x0487, "rw"), c("sa-IN", 0x044F, "sa"), c("se-NO", 0x043B, "se"),
    c("si-LK", 0x045B, "si"), c("sk-SK", 0x041B, "sk"), c("sl-SI", 0x0424, "sl"),
    c("sq-AL", 0x041C, "sq"),
    c("sr-Cyrl-RS", 0x281A, "sr-Cyrl"), c("sr-Cyrl-BA", 0x1C1A, "sr-Cyrl"),
    c("sr-Cyrl-ME", 0x301A, "sr-Cyrl"),
    c("sr-Latn-RS", 0x241A, "sr-Latn"), c("sr-Latn-BA", 0x181A, "sr-Latn"),
    c("sr-Latn-ME", 0x2C1A, "sr-Latn"),
    c("sv-SE", 0x041D, "sv"), c("sv-FI", 0x081D, "sv"),
    c("sw-KE", 0x0441, "sw"), c("ta-IN", 0x0449, "ta"), c("te-IN", 0x044A, "te"),
    c("tg-Cyrl-TJ", 0x0428, "tg-Cyrl"), c("th-TH", 0x041E, "th"),
    c("tk-TM", 0x0442, "tk"), c("tn-ZA", 0x0432, "tn"), c("tr-TR", 0x041F, "tr"),
    c("tt-RU", 0x0444, "tt"), c("ug-CN", 0x0480, "ug"), c("uk-UA", 0x0422, "uk"),
    c("ur-PK", 0x0420, "ur"),
    c("uz-Cyrl-UZ", 0x0843, "uz-Cyrl"), c("uz-Latn-UZ", 0x0443, "uz-Latn"),
    c("vi-VN", 0x042A, "vi"), c("wo-SN", 0x0488, "wo"), c("xh-ZA", 0x0434, "xh"),
    c("yo-NG", 0x046A, "yo"),
    c("zh-CN", 0x0804, "zh-Hans"), c("zh-SG", 0x1004, "zh-Hans"),
    c("zh-TW", 0x0404, "zh-Hant"), c("zh-HK", 0x0C04, "zh-Hant"),
    c("zh-MO", 0x1404, "zh-Hant"),
    c("zu-ZA", 0x0435, "zu"),

    // Pseudo-locales used for localization testing.
    c("qps-ploc", 0x0501, ""), c("qps-ploca", 0x05FE, ""), c("qps-plocm", 0x09FF, ""),
];

lazy_static! {
    static ref BY_TAG: HashMap<String, &'static CultureDef> = CULTURES
        .iter()
        .map(|def| (def.tag.to_ascii_lowercase(), def))
        .collect();

    /// Parent LCID → LCIDs of its specific (non-neutral) children, in table
    /// order. Neutral cultures never appear as children, so a script
    /// neutral like `sr-Cyrl` is reachable only through its own children.
    static ref DESCENDANTS: HashMap<u32, Vec<u32>> = {
        let mut map: HashMap<u32, Vec<u32>> = HashMap::new();
        for def in CULTURES {
            if def.neutral || def.parent.is_empty() {
                continue;
            }
            if let Some(parent) = BY_TAG.get(&def.parent.to_ascii_lowercase()) {
                map.entry(parent.lcid).or_default().push(def.lcid);
            }
        }
        map
    };
}

/// Looks a tag up in the culture table, case-insensitively.
pub fn culture_by_tag(tag: &str) -> Option<&'static CultureDef> {
    BY_TAG.get(&tag.to_ascii_lowercase()).copied()
}

/// The specific children registered under the given culture identifier.
pub fn descendants_of(lcid: u32) -> &'static [u32] {
    DESCENDANTS.get(&lcid).map(Vec::as_slice).unwrap_or(&[])
}

/// Whether a dotted filename segment denotes a translated sibling.
///
/// `qps-*` pseudo-locales are always accepted. Any other tag must have a
/// pre-dash segment of at most three characters (so that segments like
/// `config` or `aspx` are never mistaken for cultures), must parse as a
/// language identifier, and must exist in the culture table. Malformed
/// input returns `false`, never panics.
pub fn is_culture_suffix(tag: &str) -> bool {
    if tag.is_empty() {
        return false;
    }
    if tag.starts_with("qps-") {
        return true;
    }
    let prefix = tag.split('-').next().unwrap_or(tag);
    if prefix.len() > 3 {
        return false;
    }
    if tag.parse::<LanguageIdentifier>().is_err() {
        return false;
    }
    culture_by_tag(tag).is_some()
}
