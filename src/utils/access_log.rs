use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};

// 每个请求结束后记录一行访问日志
pub struct AccessLogFairing;

#[rocket::async_trait]
impl Fairing for AccessLogFairing {
    fn info(&self) -> Info {
        Info {
            name: "Per-request access log",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let status = res.status();
        if status.class().is_server_error() {
            log::warn!("{} {} -> {}", req.method(), req.uri(), status);
        } else {
            log::info!("{} {} -> {}", req.method(), req.uri(), status);
        }
    }
}
