use api::asset::Asset;
use api::backend::simulated::SimulatedBackend;
use api::backend::TransferBackend;
use api::chain::Chain;
use api::route::RouteForm;
use api::selection::NavKey;
use api::selection::PanelEvent;
use api::selection::RecentSelections;
use api::selection::SelectionPanel;
use api::share_link::LinkExpiry;
use api::transfer_details::TestAmount;
use api::transfer_details::TransferDetails;
use api::usd_amount::UsdAmount;
use api::verification::OtpCode;
use api::wizard::StepOutput;
use api::wizard::TransferStep;
use api::wizard::Transition;
use api::wizard::WizardState;

const RECIPIENT: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

#[tokio::test]
async fn usdc_on_polygon_from_selection_to_share_link() {
    let backend = SimulatedBackend::new("https://dexter.com");
    let mut wizard = WizardState::new();
    let mut form = RouteForm::new();

    // type "usd" into the asset selector and take the first match
    let assets = api::route::asset_options(&RecentSelections::new());
    let mut asset_panel = SelectionPanel::new();
    asset_panel.set_query("usd");
    let PanelEvent::Committed(asset) = asset_panel.handle_key(NavKey::Enter, &assets) else {
        panic!("expected a commit");
    };
    assert_eq!(asset, Asset::USDC);
    form.select_asset(asset);

    let mut recent_chains = RecentSelections::new();
    recent_chains.record(Chain::Optimism);
    let chains = api::route::chain_options(asset, &recent_chains);
    let mut chain_panel = SelectionPanel::new();
    chain_panel.handle_key(NavKey::ArrowDown, &chains);
    // Optimism (recent) sits first, Ethereum and Polygon follow as popular
    chain_panel.handle_key(NavKey::ArrowDown, &chains);
    chain_panel.handle_key(NavKey::ArrowDown, &chains);
    let PanelEvent::Committed(chain) = chain_panel.handle_key(NavKey::Enter, &chains) else {
        panic!("expected a commit");
    };
    assert_eq!(chain, Chain::Polygon);
    form.select_chain(chain).unwrap();
    form.set_address(RECIPIENT);

    let route = form.validate().unwrap();
    wizard.advance(StepOutput::RouteConfirmed(route.clone())).unwrap();

    let assessment = backend.scan_address(&route).await.unwrap();
    assert_eq!(assessment.score(), 28);
    wizard.advance(StepOutput::ScanAcknowledged).unwrap();
    assert_eq!(wizard.step(), TransferStep::TestTransfer);

    backend.connect_wallet().await.unwrap();
    let details = TransferDetails::calculate(TestAmount::Ten, wizard.route().unwrap());
    assert_eq!(details.total_charge(), UsdAmount::from_cents(1010));
    let sent = backend.submit_test_transfer(details).await.unwrap();
    wizard.advance(StepOutput::TransferSent(sent)).unwrap();

    let email = "sender@example.com";
    backend.send_verification_code(email).await.unwrap();
    let mut code = OtpCode::new();
    for (slot, digit) in "482913".chars().enumerate() {
        code.enter(slot, &digit.to_string());
    }
    backend.verify_code(email, &code).await.unwrap();
    wizard
        .advance(StepOutput::EmailVerified {
            email: email.to_string(),
        })
        .unwrap();
    assert_eq!(wizard.step(), TransferStep::LinkSharing);

    let details = wizard.details().unwrap();
    let link = backend
        .create_share_link(details, Some(LinkExpiry::Hours72))
        .await
        .unwrap();
    assert!(link.url().starts_with("https://dexter.com/test/"));
    assert!(link.expires_at().is_some());

    assert_eq!(wizard.advance(StepOutput::LinkShared), Ok(Transition::Completed));
}

#[test]
fn deep_link_into_later_step_falls_back_to_start() {
    let mut wizard = WizardState::resume_at(TransferStep::EmailVerification);
    let transition = wizard
        .advance(StepOutput::EmailVerified {
            email: "x@y.io".into(),
        })
        .unwrap();
    assert_eq!(
        transition,
        Transition::Redirected {
            to: TransferStep::AssetSelection
        }
    );
    assert!((wizard.progress_fraction() - 0.2).abs() < f64::EPSILON);
}
