use serde::{Deserialize, Serialize};

/// localStorage key holding the admin JWT.
pub const STORAGE_KEY: &str = "chambers_admin_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Admin email.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: usize,
    pub role: String,
}

/// Persists the token after a successful login.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn setItem(key: &str, value: &str);
        }

        setItem(STORAGE_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn removeItem(key: &str);
        }

        removeItem(STORAGE_KEY);
    }
}

/// The stored token, if any. Server renders never see localStorage, so
/// this is None during SSR and the guard resolves after hydration.
pub fn stored_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn getItem(key: &str) -> Option<String>;
        }

        return getItem(STORAGE_KEY).filter(|t| !t.is_empty());
    }

    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// True when the stored token decodes to an admin claim. Signature and
/// expiry are only enforced server-side; this gates UI, not data.
pub fn has_admin_session() -> bool {
    stored_token()
        .and_then(|token| decode_claims(&token))
        .map(|claims| claims.role == "admin")
        .unwrap_or(false)
}

/// Decodes the JWT payload without verifying the signature.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload = parts[1];

    // Pad to a multiple of 4 for base64 decoding
    let padded_payload = match payload.len() % 4 {
        2 => format!("{}==", payload),
        3 => format!("{}=", payload),
        _ => payload.to_string(),
    };

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_name = atob)]
            fn base64_decode(data: &str) -> String;
        }

        if let Ok(decoded) = std::panic::catch_unwind(|| base64_decode(&padded_payload)) {
            if let Ok(claims) = serde_json::from_str::<Claims>(&decoded) {
                return Some(claims);
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = padded_payload;
    }

    None
}

#[cfg(feature = "ssr")]
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "chambers-dev-secret".to_string())
}

/// Signs an 8-hour admin token for `email`.
#[cfg(feature = "ssr")]
pub fn issue_token(email: &str) -> Result<String, jsonwebtoken::errors::Error> {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(8))
        .map(|t| t.timestamp() as usize)
        .unwrap_or(0);

    let claims = Claims {
        sub: email.to_string(),
        exp: expiration,
        role: "admin".to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
}

/// Verifies signature and expiry and returns the claims.
#[cfg(feature = "ssr")]
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    use jsonwebtoken::{decode, DecodingKey, Validation};

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )?;

    Ok(data.claims)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_verify_and_carry_the_admin_role() {
        let token = issue_token("counsel@example.com").unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.sub, "counsel@example.com");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > chrono::Utc::now().timestamp() as usize);
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        assert!(verify_token("not.a.token").is_err());
        assert!(verify_token("").is_err());
    }
}
