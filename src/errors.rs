use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(
    InvalidPayloadJson,
    "Invalid billing schedule payload (expected a JSON array of groups)."
);
define_client_error!(InvalidConfigRon, "Invalid view config (invalid RON format).");
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
