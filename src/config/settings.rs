//! Merchant settings structure
//!
//! Defines the settings value produced by a successful configuration load,
//! including the fixed `parmcom` merchant parameters.

use serde::Serialize;
use url::Url;

/// Default advert image
pub const DEFAULT_ADVERT: &str = "sg.gif";
/// Default payment page background color
pub const DEFAULT_BG_COLOR: &str = "ffffff";
/// Default payment block alignment
pub const DEFAULT_BLOCK_ALIGN: &str = "center";
/// Default payment block ordering
pub const DEFAULT_BLOCK_ORDER: &str = "1,2,3,4,5,6,7,8";
/// Default transport condition
pub const DEFAULT_CONDITION: &str = "SSL";
/// Default currency (ISO 4217 numeric code for EUR)
pub const DEFAULT_CURRENCY: u32 = 978;
/// Default header display flag
pub const DEFAULT_HEADER_FLAG: bool = true;
/// Default secondary logo
pub const DEFAULT_LOGO2: &str = "sogenactif.gif";
/// Default accepted payment means
pub const DEFAULT_PAYMENT_MEANS: &str = "CB,2,VISA,2,MASTERCARD,2,PAYLIB,2";
/// Default link target frame
pub const DEFAULT_TARGET: &str = "_top";
/// Default payment page text color
pub const DEFAULT_TEXT_COLOR: &str = "000000";

/// Merchant gateway configuration produced by a load.
///
/// The value is fully owned by the caller: the loader keeps no reference to
/// it and every field can be overridden after loading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Diagnostic mode flag
    pub debug: bool,
    /// Path to the merchant logo, `${NAME}` tokens resolved
    pub logo_path: String,
    /// Path to the Sogenactif library files, `${NAME}` tokens resolved
    pub library_path: String,
    /// Root directory holding per-merchant certificates, `${NAME}` tokens resolved
    pub merchants_root_dir: String,
    /// Path to the payment page media files, `${NAME}` tokens resolved
    pub media_path: String,
    /// Merchant identifier registered with the gateway
    pub merchant_id: String,
    /// Merchant country code
    pub merchant_country: String,
    /// Merchant currency code
    pub merchant_currency_code: String,
    /// Where the buyer lands after cancelling the payment
    pub cancel_url: Url,
    /// Where the buyer lands after completing the payment
    pub return_url: Url,
    /// Server-to-server response endpoint, absent when not configured
    pub auto_response_url: Option<Url>,

    /// Advert image shown on the payment page
    pub advert: String,
    /// Payment page background color
    pub bg_color: String,
    /// Payment block alignment
    pub block_align: String,
    /// Payment block ordering
    pub block_order: String,
    /// Transport condition
    pub condition: String,
    /// ISO 4217 numeric currency code
    pub currency: u32,
    /// Whether the payment page header is displayed
    pub header_flag: bool,
    /// Secondary logo shown on the payment page
    pub logo2: String,
    /// Accepted payment means
    pub payment_means: String,
    /// Link target frame for the payment page
    pub target: String,
    /// Payment page text color
    pub text_color: String,
}

impl Settings {
    /// Assign the fixed `parmcom` merchant parameters.
    ///
    /// These keys are never read from the configuration file. Callers may
    /// override any of them once the settings are loaded.
    pub fn apply_merchant_defaults(&mut self) {
        self.advert = DEFAULT_ADVERT.to_owned();
        self.bg_color = DEFAULT_BG_COLOR.to_owned();
        self.block_align = DEFAULT_BLOCK_ALIGN.to_owned();
        self.block_order = DEFAULT_BLOCK_ORDER.to_owned();
        self.condition = DEFAULT_CONDITION.to_owned();
        self.currency = DEFAULT_CURRENCY;
        self.header_flag = DEFAULT_HEADER_FLAG;
        self.logo2 = DEFAULT_LOGO2.to_owned();
        self.payment_means = DEFAULT_PAYMENT_MEANS.to_owned();
        self.target = DEFAULT_TARGET.to_owned();
        self.text_color = DEFAULT_TEXT_COLOR.to_owned();
    }
}
