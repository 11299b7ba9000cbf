use showcase_gate::gate::{AccessGate, Credential};
use showcase_gate::models::{NavigationOutcome, Route, View};
use showcase_gate::navigation::{NavigationController, RecordingNavigator};
use showcase_gate::session::{MemoryBackend, SessionStore};
use speculate2::speculate;

const PASSWORD: &str = "letmein";
const EXTERNAL: &str = "https://ebhemh.com/neo-bank/";

speculate! {
    before {
        let navigator = RecordingNavigator::new();
        let gate = AccessGate::new(
            Credential::new(PASSWORD),
            SessionStore::new(MemoryBackend::new()),
        );
        let nav = NavigationController::new(gate, navigator.clone(), EXTERNAL);
    }

    describe "protected views" {
        it "redirect to the gate while locked" {
            assert_eq!(
                nav.navigate(Route::Protected(View::Dashboard)),
                NavigationOutcome::RedirectToGate
            );
            assert_eq!(nav.navigate_path("page/dashboard"), NavigationOutcome::RedirectToGate);
        }

        it "render once the gate is cleared" {
            assert!(nav.gate().attempt("wrong").is_err());
            assert!(!nav.gate().is_unlocked());

            nav.gate().attempt(PASSWORD).unwrap();
            assert_eq!(
                nav.navigate_path("/dashboard"),
                NavigationOutcome::Render(View::Dashboard)
            );
        }

        it "lock again immediately after revoke" {
            nav.gate().attempt(PASSWORD).unwrap();
            assert_eq!(nav.navigate_path("dashboard"), NavigationOutcome::Render(View::Dashboard));

            nav.gate().revoke();
            let outcome = nav.navigate(Route::Protected(View::Dashboard));
            assert_eq!(outcome, NavigationOutcome::RedirectToGate);
            assert_eq!(outcome.rendered(), Some("login"));
        }
    }

    describe "gate" {
        it "renders for empty and login paths" {
            assert_eq!(nav.navigate_path(""), NavigationOutcome::RenderGate);
            assert_eq!(nav.navigate_path("/login"), NavigationOutcome::RenderGate);
        }
    }

    describe "unknown routes" {
        it "redirect to the gate even when unlocked" {
            nav.gate().attempt(PASSWORD).unwrap();
            assert_eq!(nav.navigate_path("settings"), NavigationOutcome::RedirectToGate);
            assert_eq!(nav.navigate(Route::Unknown), NavigationOutcome::RedirectToGate);
        }
    }

    describe "external redirect" {
        it "hands control to the external target" {
            let outcome = nav.navigate_path("neo-bank");
            assert_eq!(outcome, NavigationOutcome::LeftApplication(EXTERNAL.to_string()));
            assert_eq!(outcome.rendered(), None);
            assert_eq!(navigator.opened(), vec![EXTERNAL]);
        }
    }
}
