//! Bearer token provider implementation

use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    Engine as _,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use jl_shared::JwtConfig;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::entities::principal::PrincipalDescriptor;
use crate::domain::entities::token::{Claims, TokenPair, AUTHORITIES_CLAIM};
use crate::domain::value_objects::authentication::AuthenticationContext;
use crate::errors::{DomainError, TokenError};

use super::config::TokenProviderConfig;
use super::outcome::{ParsedClaims, TokenRejection, TokenStatus};

/// Minimum decoded secret length for HS256 (256 bits)
pub const MIN_SECRET_BYTES: usize = 32;

/// Issues and reads back HS256-signed bearer tokens
///
/// The key is derived once at construction and never changes, so a single
/// provider can be shared behind an `Arc` by any number of callers.
pub struct TokenProvider {
    config: TokenProviderConfig,
    access_ttl: Duration,
    refresh_ttl: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Signature, structure, `exp` and `nbf` all enforced with zero leeway
    validation: Validation,
    /// Same as `validation` without the expiry check
    lenient_validation: Validation,
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("access_token_expiry_seconds", &self.config.access_token_expiry_seconds)
            .field("refresh_token_expiry_seconds", &self.config.refresh_token_expiry_seconds)
            .finish()
    }
}

impl TokenProvider {
    /// Creates a new token provider
    ///
    /// # Arguments
    ///
    /// * `config` - Base64 secret and token lifetimes
    ///
    /// # Returns
    ///
    /// * `Ok(TokenProvider)` - Key derived successfully
    /// * `Err(DomainError)` - Secret is not base64, decodes to fewer than
    ///   32 bytes, or an expiry is not positive or too large to add to the
    ///   current time
    pub fn new(config: TokenProviderConfig) -> Result<Self, DomainError> {
        let access_ttl = token_lifetime("access", config.access_token_expiry_seconds)?;
        let refresh_ttl = token_lifetime("refresh", config.refresh_token_expiry_seconds)?;

        let key_bytes = STANDARD
            .decode(&config.secret)
            .map_err(|_| DomainError::Token(TokenError::InvalidSecretEncoding))?;

        if key_bytes.len() < MIN_SECRET_BYTES {
            return Err(DomainError::Token(TokenError::WeakKey {
                bits: key_bytes.len() * 8,
            }));
        }

        let encoding_key = EncodingKey::from_secret(&key_bytes);
        let decoding_key = DecodingKey::from_secret(&key_bytes);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        let mut lenient_validation = validation.clone();
        lenient_validation.validate_exp = false;

        debug!(
            access_expiry = config.access_token_expiry_seconds,
            refresh_expiry = config.refresh_token_expiry_seconds,
            "Token provider initialised"
        );

        Ok(Self {
            config,
            access_ttl,
            refresh_ttl,
            encoding_key,
            decoding_key,
            validation,
            lenient_validation,
        })
    }

    /// Creates a token provider from the shared JWT configuration
    pub fn from_config(config: &JwtConfig) -> Result<Self, DomainError> {
        Self::new(TokenProviderConfig::from(config))
    }

    /// Issues an access token and a refresh token for a principal
    ///
    /// The access token carries the principal's username as `sub` and the
    /// comma-joined authorities as `auth`; the refresh token carries only its
    /// expiry. Both are returned with the `"Bearer "` prefix.
    ///
    /// # Arguments
    ///
    /// * `principal` - The authenticated principal
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The signed token pair
    /// * `Err(DomainError)` - Signing failed
    pub fn issue_token_pair<P>(&self, principal: &P) -> Result<TokenPair, DomainError>
    where
        P: PrincipalDescriptor + ?Sized,
    {
        let now = Utc::now();
        let access_exp = now
            .checked_add_signed(self.access_ttl)
            .ok_or(DomainError::Token(TokenError::TokenGenerationFailed))?
            .timestamp();
        let refresh_exp = now
            .checked_add_signed(self.refresh_ttl)
            .ok_or(DomainError::Token(TokenError::TokenGenerationFailed))?
            .timestamp();

        let access_claims =
            Claims::new_access_token(principal.username(), principal.authorities(), access_exp);
        let refresh_claims = Claims::new_refresh_token(refresh_exp);

        let access_jwt = self.encode_jwt(&access_claims)?;
        let refresh_jwt = self.encode_jwt(&refresh_claims)?;

        debug!(subject = principal.username(), "Issued token pair");

        Ok(TokenPair::new(&access_jwt, &refresh_jwt))
    }

    /// Rebuilds the authentication context carried by an access token
    ///
    /// Expired tokens are still readable here; rejecting them is the job of
    /// [`TokenProvider::is_valid`]. Call that first for untrusted input.
    ///
    /// # Arguments
    ///
    /// * `access_token` - Compact JWT without the `"Bearer "` prefix
    ///
    /// # Returns
    ///
    /// * `Ok(AuthenticationContext)` - Subject and authorities from the token
    /// * `Err(DomainError)` - Bad signature or structure, or the `auth` / `sub`
    ///   claim is missing
    pub fn authenticate(&self, access_token: &str) -> Result<AuthenticationContext, DomainError> {
        let parsed = self.parse_claims(access_token)?;
        if parsed.is_expired() {
            debug!(subject = ?parsed.claims().sub, "Authenticating from an expired token");
        }
        let claims = parsed.into_claims();

        let authorities = claims.authorities().ok_or_else(|| {
            DomainError::Token(TokenError::MissingClaim {
                claim: AUTHORITIES_CLAIM.to_string(),
            })
        })?;

        let subject = claims
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or_else(|| {
                DomainError::Token(TokenError::MissingClaim {
                    claim: "sub".to_string(),
                })
            })?;

        Ok(AuthenticationContext::new(subject, authorities))
    }

    /// Checks whether an untrusted token is acceptable
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Signature, structure and expiry all check out
    /// * `Ok(false)` - Invalid signature or structure, expired, unsupported,
    ///   or empty (logged at `info`)
    /// * `Err(DomainError)` - Any other failure, e.g. a token that is not yet
    ///   valid; callers must treat this as a fault
    pub fn is_valid(&self, token: &str) -> Result<bool, DomainError> {
        match self.classify(token) {
            TokenStatus::Valid => Ok(true),
            TokenStatus::Rejected(_) => Ok(false),
            TokenStatus::Fault(error) => Err(error),
        }
    }

    /// Runs strict validation and reports which outcome applies
    pub fn classify(&self, token: &str) -> TokenStatus {
        if token.trim().is_empty() {
            info!("{}", TokenRejection::Empty.message());
            return TokenStatus::Rejected(TokenRejection::Empty);
        }

        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(_) => TokenStatus::Valid,
            Err(error) => match rejection_for(token, error.kind()) {
                Some(rejection) => {
                    info!(error = %error, "{}", rejection.message());
                    TokenStatus::Rejected(rejection)
                }
                None => TokenStatus::Fault(DomainError::Token(TokenError::from_jwt(&error))),
            },
        }
    }

    /// Verifies a token and returns its claims, even when it has expired
    pub(crate) fn parse_claims(&self, token: &str) -> Result<ParsedClaims, DomainError> {
        if token.trim().is_empty() {
            return Err(DomainError::Token(TokenError::EmptyToken));
        }

        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Ok(ParsedClaims::Fresh(data.claims)),
            Err(error) if matches!(error.kind(), ErrorKind::ExpiredSignature) => {
                let data = decode::<Claims>(token, &self.decoding_key, &self.lenient_validation)
                    .map_err(|e| DomainError::Token(TokenError::from_jwt(&e)))?;
                Ok(ParsedClaims::Expired(data.claims))
            }
            Err(_) if is_unsecured(token) => Err(DomainError::Token(TokenError::UnsupportedToken)),
            Err(error) => Err(DomainError::Token(TokenError::from_jwt(&error))),
        }
    }

    /// Encodes claims into an HS256 JWT
    fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}

/// Converts a configured expiry into a lifetime that can be added to "now"
fn token_lifetime(kind: &str, seconds: i64) -> Result<Duration, DomainError> {
    if seconds <= 0 {
        return Err(DomainError::Validation {
            message: format!("{} token expiry must be a positive number of seconds", kind),
        });
    }

    Duration::try_seconds(seconds)
        .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
        .ok_or_else(|| DomainError::Validation {
            message: format!("{} token expiry of {} seconds is out of range", kind, seconds),
        })
}

/// The codec failures that count as an ordinary rejection
fn rejection_for(token: &str, kind: &ErrorKind) -> Option<TokenRejection> {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidToken | ErrorKind::Json(_)
            if is_unsecured(token) =>
        {
            Some(TokenRejection::Unsupported)
        }
        ErrorKind::InvalidSignature
        | ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_)
        | ErrorKind::MissingRequiredClaim(_) => Some(TokenRejection::Invalid),
        ErrorKind::ExpiredSignature => Some(TokenRejection::Expired),
        ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName
        | ErrorKind::MissingAlgorithm => Some(TokenRejection::Unsupported),
        _ => None,
    }
}

/// Header fields readable before the signature is checked
#[derive(Deserialize)]
struct UnverifiedHeader {
    alg: Option<String>,
}

/// An unsigned JWT: empty signature segment or `"alg": "none"`
fn is_unsecured(token: &str) -> bool {
    let mut segments = token.split('.');
    let (Some(header), Some(_), Some(signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return false;
    };

    if signature.is_empty() {
        return true;
    }

    URL_SAFE_NO_PAD
        .decode(header)
        .ok()
        .and_then(|bytes| serde_json::from_slice::<UnverifiedHeader>(&bytes).ok())
        .and_then(|header| header.alg)
        .is_some_and(|alg| alg.eq_ignore_ascii_case("none"))
}
