// SPDX-License-Identifier: MPL-2.0
//! Token resolution with startup validation.
//!
//! The resolver owns the loaded dictionary and answers `(token, mode)`
//! lookups. Every token a component references is declared up front (see
//! [`crate::ui::required_tokens`]) and validated in [`Resolver::new`]:
//! presence and value kind are checked once, so render code never meets a
//! failed lookup. The typed accessors absorb the impossible miss with a
//! logged fallback rather than unwinding through the view tree.

use super::tokens::{TokenDictionary, TokenValue};
use crate::error::TokenError;
use iced::Color;

/// Expected kind of a referenced token, used during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `#rrggbb` string literal, possibly with a `dark` variant.
    Color,
    /// Numeric dimension (spacing, radius, fixed size).
    Length,
    /// Unitless number in `0.0..=1.0` (opacity).
    Ratio,
}

impl TokenKind {
    fn label(self) -> &'static str {
        match self {
            TokenKind::Color => "color",
            TokenKind::Length => "length",
            TokenKind::Ratio => "ratio",
        }
    }
}

/// A token reference declared by a component.
pub type TokenRef = (&'static str, TokenKind);

/// Resolves token names to concrete values for the active mode.
#[derive(Debug, Clone)]
pub struct Resolver {
    dictionary: TokenDictionary,
}

impl Resolver {
    /// Builds a resolver, validating every declared reference against the
    /// dictionary. A missing or mistyped token fails here, before any view
    /// is mounted.
    pub fn new(dictionary: TokenDictionary, required: &[TokenRef]) -> Result<Self, TokenError> {
        for &(name, kind) in required {
            let entry = dictionary
                .get(name)
                .ok_or_else(|| TokenError::Missing(name.to_string()))?;

            // Both the base value and a dark variant (if any) must satisfy
            // the declared kind.
            check_kind(name, kind, &entry.value)?;
            if let Some(dark) = &entry.dark {
                check_kind(name, kind, dark)?;
            }
        }
        Ok(Self { dictionary })
    }

    #[must_use]
    pub fn dictionary(&self) -> &TokenDictionary {
        &self.dictionary
    }

    /// Raw resolution: the dark variant when one exists and dark mode is
    /// active, the base literal otherwise.
    #[must_use]
    pub fn resolve(&self, name: &str, dark_mode: bool) -> Option<&TokenValue> {
        self.dictionary
            .get(name)
            .map(|entry| entry.resolved(dark_mode))
    }

    /// Resolves a color token for the given mode.
    #[must_use]
    pub fn color(&self, name: &str, dark_mode: bool) -> Color {
        match self.resolve(name, dark_mode) {
            Some(TokenValue::Text(literal)) => parse_hex_color(literal).unwrap_or_else(|| {
                tracing::error!(token = name, %literal, "unparseable color token");
                Color::TRANSPARENT
            }),
            _ => {
                tracing::error!(token = name, "unvalidated color token lookup");
                Color::TRANSPARENT
            }
        }
    }

    /// Resolves a color token and applies an opacity ratio token to it.
    #[must_use]
    pub fn color_with_opacity(&self, color: &str, opacity: &str, dark_mode: bool) -> Color {
        Color {
            a: self.ratio(opacity),
            ..self.color(color, dark_mode)
        }
    }

    /// Resolves a dimension token. Lengths are mode-independent.
    #[must_use]
    pub fn length(&self, name: &str) -> f32 {
        self.number(name)
    }

    /// Resolves an opacity token. Ratios are mode-independent.
    #[must_use]
    pub fn ratio(&self, name: &str) -> f32 {
        self.number(name)
    }

    fn number(&self, name: &str) -> f32 {
        match self.resolve(name, false) {
            Some(TokenValue::Number(value)) => *value as f32,
            _ => {
                tracing::error!(token = name, "unvalidated numeric token lookup");
                0.0
            }
        }
    }
}

fn check_kind(name: &str, kind: TokenKind, value: &TokenValue) -> Result<(), TokenError> {
    match (kind, value) {
        (TokenKind::Color, TokenValue::Text(literal)) => {
            if parse_hex_color(literal).is_some() {
                Ok(())
            } else {
                Err(TokenError::MalformedColor {
                    name: name.to_string(),
                    literal: literal.clone(),
                })
            }
        }
        (TokenKind::Length | TokenKind::Ratio, TokenValue::Number(_)) => Ok(()),
        _ => Err(TokenError::WrongKind {
            name: name.to_string(),
            expected: kind.label().to_string(),
        }),
    }
}

/// Parses a `#rrggbb` literal into an opaque [`Color`].
fn parse_hex_color(literal: &str) -> Option<Color> {
    let hex = literal.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::tokens::TokenDictionary;

    const SAMPLE: &str = r##"
[global.Spacing20]
value = 20.0
unit = "px"

[global.BackdropOpacity]
value = 0.25

[global.Black]
value = "#1b1b1b"

[global.Background]
value = "#f4f4f4"
dark = "#202020"
"##;

    fn sample_dictionary() -> TokenDictionary {
        TokenDictionary::from_str(SAMPLE).expect("sample should parse")
    }

    #[test]
    fn mode_independent_token_resolves_identically() {
        let resolver = Resolver::new(sample_dictionary(), &[]).expect("no references");
        assert_eq!(
            resolver.resolve("Spacing20", true),
            resolver.resolve("Spacing20", false)
        );
        assert_eq!(resolver.length("Spacing20"), 20.0);
    }

    #[test]
    fn mode_variant_color_differs_between_modes() {
        let resolver = Resolver::new(sample_dictionary(), &[]).expect("no references");
        assert_ne!(
            resolver.color("Background", true),
            resolver.color("Background", false)
        );
        // A color without a dark variant is the same in both modes.
        assert_eq!(resolver.color("Black", true), resolver.color("Black", false));
    }

    #[test]
    fn missing_reference_fails_at_construction() {
        let result = Resolver::new(sample_dictionary(), &[("NoSuchToken", TokenKind::Length)]);
        assert!(matches!(result, Err(TokenError::Missing(name)) if name == "NoSuchToken"));
    }

    #[test]
    fn wrong_kind_reference_fails_at_construction() {
        let result = Resolver::new(sample_dictionary(), &[("Spacing20", TokenKind::Color)]);
        assert!(matches!(result, Err(TokenError::WrongKind { name, .. }) if name == "Spacing20"));
    }

    #[test]
    fn malformed_color_fails_at_construction() {
        let dict = TokenDictionary::from_str("[global.Oops]\nvalue = \"blueish\"\n").unwrap();
        let result = Resolver::new(dict, &[("Oops", TokenKind::Color)]);
        assert!(matches!(result, Err(TokenError::MalformedColor { .. })));
    }

    #[test]
    fn valid_references_pass_validation() {
        let resolver = Resolver::new(
            sample_dictionary(),
            &[
                ("Spacing20", TokenKind::Length),
                ("BackdropOpacity", TokenKind::Ratio),
                ("Black", TokenKind::Color),
                ("Background", TokenKind::Color),
            ],
        );
        assert!(resolver.is_ok());
    }

    #[test]
    fn color_with_opacity_combines_tokens() {
        let resolver = Resolver::new(sample_dictionary(), &[]).expect("no references");
        let color = resolver.color_with_opacity("Black", "BackdropOpacity", false);
        assert!((color.a - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn parse_hex_color_accepts_six_digit_literals() {
        let color = parse_hex_color("#ff8000").expect("valid literal");
        assert!((color.r - 1.0).abs() < 0.005);
        assert!((color.b - 0.0).abs() < 0.005);

        assert!(parse_hex_color("ff8000").is_none());
        assert!(parse_hex_color("#ff80").is_none());
        assert!(parse_hex_color("#zzzzzz").is_none());
    }
}
