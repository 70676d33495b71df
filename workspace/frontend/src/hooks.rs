use std::cell::RefCell;
use std::rc::Rc;

use common::{AnalysisResponse, AnalysisSession, AnalyzeRequest};
use yew::prelude::*;

use crate::api_client;

/// Handle returned by [`use_analysis_session`].
#[derive(Clone)]
pub struct UseAnalysisSession {
    session: Rc<RefCell<AnalysisSession>>,
    rerender: UseForceUpdateHandle,
}

impl UseAnalysisSession {
    /// Copy of the current session for rendering.
    pub fn snapshot(&self) -> AnalysisSession {
        self.session.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.session.borrow().is_busy()
    }

    /// Submit one request. Ignored while another request is in flight.
    /// `on_success` runs with the new response once it has been stored.
    pub fn submit(&self, request: AnalyzeRequest, on_success: Callback<AnalysisResponse>) {
        let Some(ticket) = self.session.borrow_mut().begin() else {
            log::debug!("Submission ignored, analysis already running");
            return;
        };
        self.rerender.force_update();

        let session = self.session.clone();
        let rerender = self.rerender.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api_client::analyze(&request).await;
            let stored = outcome.as_ref().ok().cloned();
            let applied = session.borrow_mut().finish(ticket, outcome);
            rerender.force_update();
            if applied {
                if let Some(response) = stored {
                    on_success.emit(response);
                }
            }
        });
    }
}

/// Dashboard session shared by the page: the held response plus the busy
/// and error flags. Completions of superseded requests are dropped.
#[hook]
pub fn use_analysis_session() -> UseAnalysisSession {
    let session = use_mut_ref(AnalysisSession::new);
    let rerender = use_force_update();
    UseAnalysisSession { session, rerender }
}
