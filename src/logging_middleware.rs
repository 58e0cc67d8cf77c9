use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::{error, info, warn};

pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = start.elapsed().as_millis();
    if status.is_server_error() {
        error!("{} {} -> {} ({} ms)", method, path, status, elapsed);
    } else if status.is_client_error() {
        warn!("{} {} -> {} ({} ms)", method, path, status, elapsed);
    } else {
        info!("{} {} -> {} ({} ms)", method, path, status, elapsed);
    }
    response
}
