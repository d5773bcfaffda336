//! Defines the external actions behind the wizard and a simulated
//! implementation of them.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::route::RouteSelection;
use crate::safety_scan::RiskAssessment;
use crate::share_link::LinkExpiry;
use crate::share_link::ShareLink;
use crate::transfer_details::TransferDetails;
use crate::verification::OtpCode;
use crate::ApiError;

/// The sender's wallet, once connected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConnection {
    pub address: String,
}

/// Services the wizard talks to outside of its own state.
///
/// Failures are reported through the same error list as input validation.
#[allow(async_fn_in_trait)]
pub trait TransferBackend {
    async fn connect_wallet(&self) -> Result<WalletConnection, ApiError>;

    async fn scan_address(&self, route: &RouteSelection) -> Result<RiskAssessment, ApiError>;

    /// Broadcasts the test transfer. The returned details carry the
    /// transaction reference.
    async fn submit_test_transfer(
        &self,
        details: TransferDetails,
    ) -> Result<TransferDetails, ApiError>;

    async fn send_verification_code(&self, email: &str) -> Result<(), ApiError>;

    async fn verify_code(&self, email: &str, code: &OtpCode) -> Result<(), ApiError>;

    async fn create_share_link(
        &self,
        details: &TransferDetails,
        expiry: Option<LinkExpiry>,
    ) -> Result<ShareLink, ApiError>;
}

/// A backend answering from fixed data, without any network access.
pub mod simulated {
    use dioxus_logger::tracing::info;

    use super::*;
    use crate::address_rules::abbreviate_address;
    use crate::safety_scan::ComponentScore;

    const WALLET_ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

    /// 64-bit FNV-1a, used to derive stable references from transfer data.
    fn fnv1a(bytes: &[u8]) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        bytes
            .iter()
            .fold(OFFSET, |hash, b| (hash ^ u64::from(*b)).wrapping_mul(PRIME))
    }

    /// Reference of the (pretend) on-chain transaction for `details`.
    pub fn transaction_ref(details: &TransferDetails) -> String {
        let key = format!(
            "{}:{}:{}:{}",
            details.asset(),
            details.chain(),
            details.recipient_address(),
            details.test_amount()
        );
        format!("0x{:016x}", fnv1a(key.as_bytes()))
    }

    /// Share-link token for a transaction reference: 12 lowercase hex digits.
    pub fn share_token(transaction_ref: &str) -> String {
        format!("{:012x}", fnv1a(transaction_ref.as_bytes()) & 0xffff_ffff_ffff)
    }

    #[derive(Debug, Clone)]
    pub struct SimulatedBackend {
        link_base: String,
        clock: fn() -> DateTime<Utc>,
    }

    impl SimulatedBackend {
        pub fn new(link_base: impl Into<String>) -> Self {
            Self {
                link_base: link_base.into(),
                clock: Utc::now,
            }
        }

        /// Replaces the time source used for link creation.
        pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
            self.clock = clock;
            self
        }
    }

    impl TransferBackend for SimulatedBackend {
        async fn connect_wallet(&self) -> Result<WalletConnection, ApiError> {
            info!("wallet connected: {}", abbreviate_address(WALLET_ADDRESS));
            Ok(WalletConnection {
                address: WALLET_ADDRESS.to_string(),
            })
        }

        async fn scan_address(&self, route: &RouteSelection) -> Result<RiskAssessment, ApiError> {
            info!("scanning {}", abbreviate_address(route.address()));
            Ok(RiskAssessment::new(vec![
                ComponentScore::new(
                    "Address Validity",
                    10,
                    "Valid address format with correct checksum",
                ),
                ComponentScore::new(
                    "Chain History",
                    9,
                    "Active address with normal transaction patterns",
                ),
                ComponentScore::new("Scam Database", 9, "No suspicious activity detected"),
            ]))
        }

        async fn submit_test_transfer(
            &self,
            details: TransferDetails,
        ) -> Result<TransferDetails, ApiError> {
            let tx_ref = transaction_ref(&details);
            info!(
                "test transfer of ${} {} on {} submitted as {}",
                details.test_amount(),
                details.asset(),
                details.chain(),
                tx_ref
            );
            Ok(details.with_transaction_ref(tx_ref))
        }

        async fn send_verification_code(&self, email: &str) -> Result<(), ApiError> {
            crate::verification::validate_email(email)?;
            info!("verification code sent");
            Ok(())
        }

        async fn verify_code(&self, _email: &str, code: &OtpCode) -> Result<(), ApiError> {
            code.code()?;
            info!("email verified");
            Ok(())
        }

        async fn create_share_link(
            &self,
            details: &TransferDetails,
            expiry: Option<LinkExpiry>,
        ) -> Result<ShareLink, ApiError> {
            let tx_ref = details
                .transaction_ref()
                .ok_or_else(|| anyhow::anyhow!("the test transfer has not been submitted yet"))?;
            let mut link = ShareLink::new(&self.link_base, share_token(tx_ref), (self.clock)());
            link.set_expiry(expiry);
            info!("share link created: {}", link.url());
            Ok(link)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::simulated::SimulatedBackend;
    use super::*;
    use crate::asset::Asset;
    use crate::chain::Chain;
    use crate::safety_scan::Grade;
    use crate::transfer_details::TestAmount;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn backend() -> SimulatedBackend {
        SimulatedBackend::new("https://dexter.com").with_clock(fixed_now)
    }

    fn details() -> TransferDetails {
        let route = RouteSelection::new(
            Asset::ETH,
            Chain::Ethereum,
            "0x742d35Cc6634C0532925a3b844Bc454e4438f44e",
        )
        .unwrap();
        TransferDetails::calculate(TestAmount::Five, &route)
    }

    #[tokio::test]
    async fn scan_grades_the_address_a() {
        let assessment = backend().scan_address(details().route()).await.unwrap();
        assert_eq!(assessment.score(), 28);
        assert_eq!(assessment.grade(), Grade::A);
    }

    #[tokio::test]
    async fn submission_assigns_a_stable_reference() {
        let backend = backend();
        let first = backend.submit_test_transfer(details()).await.unwrap();
        let second = backend.submit_test_transfer(details()).await.unwrap();
        let tx_ref = first.transaction_ref().unwrap();
        assert!(tx_ref.starts_with("0x"));
        assert_eq!(tx_ref.len(), 18);
        assert_eq!(first, second);
        assert_eq!(first.total_charge(), details().total_charge());
    }

    #[tokio::test]
    async fn share_link_needs_a_submitted_transfer() {
        let backend = backend();
        assert!(backend.create_share_link(&details(), None).await.is_err());

        let sent = backend.submit_test_transfer(details()).await.unwrap();
        let link = backend
            .create_share_link(&sent, Some(LinkExpiry::Hours24))
            .await
            .unwrap();
        assert!(link.url().starts_with("https://dexter.com/test/"));
        assert_eq!(link.token().len(), 12);
        assert_eq!(link.created_at(), fixed_now());
        assert_eq!(
            link.expires_at(),
            Some(Utc.with_ymd_and_hms(2024, 3, 2, 9, 30, 0).unwrap())
        );
    }

    #[tokio::test]
    async fn incomplete_code_is_refused() {
        let backend = backend();
        let mut code = OtpCode::new();
        code.enter(0, "1");
        let err = backend.verify_code("me@example.com", &code).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter the complete verification code");
        assert!(backend.send_verification_code("nope").await.is_err());
    }
}
