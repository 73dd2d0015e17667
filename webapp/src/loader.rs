use futures::future::join_all;
use gloo_net::http::Request;
use tracing::{Level, debug, error, instrument};

use common::fragment::{FragmentError, FragmentName, check_status};

use crate::dom;

#[instrument(level=Level::DEBUG)]
async fn fetch_fragment(name: FragmentName) -> Result<String, FragmentError> {
    let resp = Request::get(&name.path())
        .send()
        .await
        .map_err(|err| FragmentError::Transport(err.to_string()))?;

    check_status(resp.status())?;

    resp.text()
        .await
        .map_err(|err| FragmentError::Transport(err.to_string()))
}

// a failed fragment leaves its container empty; there is no retry
async fn load_fragment(name: FragmentName) {
    match fetch_fragment(name).await {
        Ok(html) => match dom::by_id(&name.container_id()) {
            Some(container) => {
                container.set_inner_html(&html);
                debug!("loaded {name} fragment");
            }
            None => debug!("no container for {name} fragment"),
        },
        Err(err) => error!("error loading {name}: {err}"),
    }
}

// resolves once every fragment has either loaded or failed, in no particular order
pub async fn load_fragments() {
    join_all(FragmentName::ALL.into_iter().map(load_fragment)).await;
}
