use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// The collaborator services are keyed by ISO 639-1 (2-letter) codes, and the
/// transliteration service is keyed by named Indic scripts. This module
/// validates codes and maps them to the names those services understand.

/// Romanization schemes the transliteration service accepts as targets
pub const SUPPORTED_SCHEMES: [&str; 4] = ["ITRANS", "IAST", "ISO", "HK"];

/// Language code type
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-3 (3-letter) code
    Part3,
}

/// Validate if a language code is a valid ISO 639-1 or ISO 639-3 code
pub fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(LanguageCodeType::Part1);
        }
    } else if normalized_code.len() == 3 && Language::from_639_3(&normalized_code).is_some() {
        return Ok(LanguageCodeType::Part3);
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Normalize a language code to ISO 639-1 (2-letter) format
///
/// The translation and speech endpoints only accept 2-letter codes, so a
/// language without an ISO 639-1 form is rejected here rather than producing
/// a request the service cannot serve.
pub fn normalize_to_part1(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if Language::from_639_1(&normalized_code).is_some() {
            return Ok(normalized_code);
        }
    } else if normalized_code.len() == 3 {
        if let Some(lang) = Language::from_639_3(&normalized_code) {
            if let Some(part1) = lang.to_639_1() {
                return Ok(part1.to_string());
            }
            return Err(anyhow!("Language '{}' has no ISO 639-1 code", code));
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Check if two language codes match (represent the same language)
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    let normalized1 = match normalize_to_part1(code1) {
        Ok(n) => n,
        Err(_) => return false,
    };

    let normalized2 = match normalize_to_part1(code2) {
        Ok(n) => n,
        Err(_) => return false,
    };

    normalized1 == normalized2
}

/// Get the language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part1(code)?;
    let lang = Language::from_639_1(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}

/// Get the named script for a language, as understood by the transliteration service
///
/// Several languages share a script (Hindi, Marathi, Sanskrit and Nepali all
/// use Devanagari), so this is a many-to-one mapping.
pub fn script_name(code: &str) -> Result<&'static str> {
    let normalized = normalize_to_part1(code)?;

    match normalized.as_str() {
        "ml" => Ok("Malayalam"),
        "kn" => Ok("Kannada"),
        "ta" => Ok("Tamil"),
        "te" => Ok("Telugu"),
        "hi" | "mr" | "sa" | "ne" => Ok("Devanagari"),
        "gu" => Ok("Gujarati"),
        "pa" => Ok("Gurmukhi"),
        "bn" | "as" => Ok("Bengali"),
        "or" => Ok("Oriya"),
        "si" => Ok("Sinhala"),
        _ => Err(anyhow!("No known script for language code: {}", code)),
    }
}

/// Check whether a romanization scheme name is supported
pub fn is_supported_scheme(scheme: &str) -> bool {
    SUPPORTED_SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme))
}
