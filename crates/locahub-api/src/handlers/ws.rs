use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tracing::{debug, warn};

use crate::state::AppState;

/// `GET /ws` — upgrade to a WebSocket. The connection starts in no room;
/// the client must send a `join` event to start receiving pushes.
pub async fn upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| serve_socket(state, socket))
}

async fn serve_socket(state: AppState, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (handle, mut outbound) = state.hub.register();
    let conn_id = handle.id;
    debug!(connection_id = %conn_id, "websocket connected");

    // Forward hub events to the socket until the hub drops the sender
    // or the socket errors out.
    let writer = tokio::spawn(async move {
        while let Some(payload) = outbound.recv().await {
            if ws_tx.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
        let _ = ws_tx.close().await;
    });

    while let Some(frame) = ws_rx.next().await {
        match frame {
            Ok(Message::Text(text)) => state.hub.handle_inbound(&conn_id, text.as_str()),
            Ok(Message::Close(_)) => break,
            Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {}
            Ok(Message::Binary(_)) => {
                debug!(connection_id = %conn_id, "ignoring binary frame");
            }
            Err(e) => {
                warn!(connection_id = %conn_id, error = %e, "websocket read error");
                break;
            }
        }
    }

    state.hub.unregister(&conn_id);
    writer.abort();
    debug!(connection_id = %conn_id, "websocket disconnected");
}
