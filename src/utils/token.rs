// ============================================================================
// TOKEN - Decodificación del bearer token (header.payload.signature)
// ============================================================================
// La firma NO se verifica: eso es trabajo del backend. Aquí solo se lee `exp`
// para saber si merece la pena entrar en pantallas protegidas.
// ============================================================================

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use crate::error::TokenError;
use crate::models::TokenClaims;

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// Algunos emisores usan el alfabeto estándar en lugar de base64url
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decodifica los claims del segmento central
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let payload = match segments.as_slice() {
        [_, payload, _] => *payload,
        _ => return Err(TokenError::Malformed(segments.len())),
    };

    let bytes = URL_SAFE_LENIENT
        .decode(payload)
        .or_else(|_| STANDARD_LENIENT.decode(payload))
        .map_err(|e| TokenError::Encoding(e.to_string()))?;

    serde_json::from_slice::<TokenClaims>(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

/// `true` solo si el token decodifica y `exp` es estrictamente posterior a `now_secs`
pub fn is_token_valid(token: &str, now_secs: i64) -> bool {
    match decode_claims(token) {
        Ok(claims) => !claims.is_expired_at(now_secs),
        Err(e) => {
            log::debug!("🔑 [TOKEN] Token no decodificable: {}", e);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod test_tokens {
    use super::URL_SAFE_LENIENT;
    use base64::Engine as _;

    /// Token sin firmar con el payload JSON dado
    pub fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_LENIENT.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_LENIENT.encode(payload)
        )
    }

    pub fn token_expiring_at(exp: i64) -> String {
        token_with_payload(&format!(r#"{{"exp":{},"sub":"admin@library.test"}}"#, exp))
    }
}

#[cfg(test)]
mod tests {
    use super::test_tokens::*;
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use rstest::rstest;

    const NOW: i64 = 1_700_000_000;

    #[rstest]
    #[case(NOW + 1, true)]
    #[case(NOW + 3600, true)]
    #[case(NOW, false)]
    #[case(NOW - 10, false)]
    fn expiry_is_compared_strictly(#[case] exp: i64, #[case] valid: bool) {
        assert_eq!(is_token_valid(&token_expiring_at(exp), NOW), valid);
    }

    #[rstest]
    #[case("")]
    #[case("not-a-token")]
    #[case("a.b")]
    #[case("a.b.c.d")]
    #[case("header.%%%%.sig")]
    fn malformed_tokens_are_invalid(#[case] token: &str) {
        assert!(!is_token_valid(token, NOW));
    }

    #[test]
    fn payload_must_be_claims_object_with_exp() {
        let array = token_with_payload("[1,2,3]");
        let no_exp = token_with_payload(r#"{"sub":"someone"}"#);
        let not_json = token_with_payload("plain text");

        assert!(matches!(decode_claims(&array), Err(TokenError::Claims(_))));
        assert!(matches!(decode_claims(&no_exp), Err(TokenError::Claims(_))));
        assert!(matches!(decode_claims(&not_json), Err(TokenError::Claims(_))));
        assert!(!is_token_valid(&no_exp, NOW));
    }

    #[test]
    fn segment_count_is_reported() {
        assert_eq!(decode_claims("a.b"), Err(TokenError::Malformed(2)));
    }

    #[test]
    fn padded_standard_base64_payload_is_accepted() {
        // "?>" fuerza caracteres '+' y '/' en base64 estándar
        let payload = format!(r#"{{"exp":{},"note":"?>?>"}}"#, NOW + 60);
        let token = format!("h.{}.s", STANDARD.encode(payload));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, NOW + 60);
    }

    #[test]
    fn optional_claims_are_read() {
        let claims = decode_claims(&token_expiring_at(NOW)).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("admin@library.test"));
        assert_eq!(claims.email, None);
    }
}
