// dolarapi.com publishes one document per quote kind under this base.
// Kind paths are joined onto it, so it is normalized to end with '/'.
pub const DOLARAPI_BASE_URL: &str = "https://dolarapi.com/v1/dolares";
pub const CRYPTO_PATH: &str = "cripto";
pub const CARD_PATH: &str = "tarjeta";

// Markup applied on top of the base cost.
pub const TRANSFER_MARKUP: f64 = 1.10;
pub const CARD_MARKUP: f64 = 1.05;

// Final prices are always a multiple of this many pesos.
pub const ROUNDING_STEP: f64 = 5.0;

// Largest sale price, in pesos, that is priced and displayed to the cent.
pub const MAX_ARS_PRICE: f64 = 1e13;

// Simulated loading time before a result is shown.
pub const DISPLAY_DELAY_MS: u64 = 500;
