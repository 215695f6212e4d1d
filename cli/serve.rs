use crate::ServeOptions;
use anyhow::Result;
use backtrace::Backtrace;
use futures::FutureExt;
use heart_core::{ClientConfig, Field};
use heart_page::PageProps;
use hyper::{header, http, Body, Request, Response, StatusCode};
use log::{error, info};
use std::{
	cell::RefCell,
	collections::BTreeMap,
	convert::Infallible,
	future::Future,
	panic::AssertUnwindSafe,
	path::{Path, PathBuf},
	sync::Arc,
};

pub const CLIENT_WASM_JS_SRC: &str = "/js/heart_client.js";

pub struct Context {
	pub config: ClientConfig,
	pub assets: Option<PathBuf>,
}

pub fn cli_serve(options: ServeOptions) -> Result<()> {
	let context = Context {
		config: ClientConfig::new(options.api_base_url),
		assets: options.assets,
	};
	let runtime = tokio::runtime::Runtime::new()?;
	runtime.block_on(serve(options.host, options.port, context, handle))?;
	Ok(())
}

pub async fn handle(context: Arc<Context>, request: Request<Body>) -> Response<Body> {
	if request.method() != http::Method::GET {
		return not_found();
	}
	let path = request.uri().path();
	match path {
		"/" => {
			let values = request
				.uri()
				.query()
				.map(prefill_values)
				.unwrap_or_default();
			let props = PageProps {
				config: context.config.clone(),
				client_wasm_js_src: context
					.assets
					.as_ref()
					.map(|_| CLIENT_WASM_JS_SRC.to_owned()),
				values,
			};
			let html = heart_page::render(&props);
			respond(StatusCode::OK, Some("text/html; charset=utf-8"), html)
		}
		"/health" => {
			let body = serde_json::json!({ "message": "Heart Disease Prediction client is running" });
			respond(
				StatusCode::OK,
				Some("application/json"),
				body.to_string(),
			)
		}
		path if path == "/styles.css" || path.starts_with("/js/") => match &context.assets {
			Some(assets) => serve_asset(assets, path).await,
			None => not_found(),
		},
		_ => not_found(),
	}
}

/// Read initial form values from a query string such as `?age=63&cp=2`. Unknown keys are ignored.
pub fn prefill_values(query: &str) -> BTreeMap<Field, String> {
	url::form_urlencoded::parse(query.as_bytes())
		.filter_map(|(key, value)| Some((Field::from_name(&key)?, value.into_owned())))
		.collect()
}

async fn serve_asset(assets: &Path, path: &str) -> Response<Body> {
	let relative_path = path.trim_start_matches('/');
	if relative_path.split('/').any(|segment| segment == ".." || segment.is_empty()) {
		return not_found();
	}
	let asset_path = assets.join(relative_path);
	match tokio::fs::read(&asset_path).await {
		Ok(data) => respond(StatusCode::OK, content_type(&asset_path), data),
		Err(_) => not_found(),
	}
}

fn content_type(path: &Path) -> Option<&'static str> {
	let extension = path.extension().and_then(|extension| extension.to_str())?;
	match extension {
		"css" => Some("text/css"),
		"js" => Some("text/javascript"),
		"svg" => Some("image/svg+xml"),
		"wasm" => Some("application/wasm"),
		_ => None,
	}
}

fn respond(
	status: StatusCode,
	content_type: Option<&'static str>,
	body: impl Into<Body>,
) -> Response<Body> {
	let mut response = Response::new(body.into());
	*response.status_mut() = status;
	if let Some(content_type) = content_type {
		response
			.headers_mut()
			.insert(header::CONTENT_TYPE, header::HeaderValue::from_static(content_type));
	}
	response
}

fn not_found() -> Response<Body> {
	respond(StatusCode::NOT_FOUND, None, "not found")
}

pub async fn serve<C, H, F>(
	host: std::net::IpAddr,
	port: u16,
	request_handler_context: C,
	request_handler: H,
) -> hyper::Result<()>
where
	C: Send + Sync + 'static,
	H: Fn(Arc<C>, Request<Body>) -> F + Send + Sync + 'static,
	F: Future<Output = Response<Body>> + Send,
{
	// Create a task local that will store the panic message and backtrace if a panic occurs.
	tokio::task_local! {
		static PANIC_MESSAGE_AND_BACKTRACE: RefCell<Option<(String, Backtrace)>>;
	}
	async fn service<C, H, F>(
		request_handler: Arc<H>,
		request_handler_context: Arc<C>,
		request: Request<Body>,
	) -> Result<Response<Body>, Infallible>
	where
		C: Send + Sync + 'static,
		H: Fn(Arc<C>, Request<Body>) -> F + Send + Sync + 'static,
		F: Future<Output = Response<Body>> + Send,
	{
		let method = request.method().clone();
		let path = request.uri().path().to_owned();
		let result = AssertUnwindSafe(request_handler(request_handler_context, request))
			.catch_unwind()
			.await;
		let response = match result {
			Ok(response) => {
				info!("{} {} {}", method, path, response.status().as_u16());
				response
			}
			Err(_) => {
				let body = PANIC_MESSAGE_AND_BACKTRACE
					.try_with(|panic_message_and_backtrace| {
						panic_message_and_backtrace
							.borrow()
							.as_ref()
							.map(|(message, backtrace)| format!("{}\n{:?}", message, backtrace))
					})
					.ok()
					.flatten()
					.unwrap_or_default();
				error!("{} {} 500\n{}", method, path, body);
				respond(StatusCode::INTERNAL_SERVER_ERROR, None, body)
			}
		};
		Ok(response)
	}
	// Install a panic hook that will record the panic message and backtrace if a panic occurs.
	let hook = std::panic::take_hook();
	std::panic::set_hook(Box::new(|panic_info| {
		let value = (panic_info.to_string(), Backtrace::new());
		let _ = PANIC_MESSAGE_AND_BACKTRACE.try_with(|panic_message_and_backtrace| {
			panic_message_and_backtrace.borrow_mut().replace(value);
		});
	}));
	// Wrap the request handler and context with Arc to allow sharing a reference to it with each task.
	let request_handler = Arc::new(request_handler);
	let request_handler_context = Arc::new(request_handler_context);
	let service = hyper::service::make_service_fn(|_| {
		let request_handler = request_handler.clone();
		let request_handler_context = request_handler_context.clone();
		async move {
			Ok::<_, Infallible>(hyper::service::service_fn(move |request| {
				let request_handler = request_handler.clone();
				let request_handler_context = request_handler_context.clone();
				PANIC_MESSAGE_AND_BACKTRACE.scope(RefCell::new(None), async move {
					service(request_handler, request_handler_context, request).await
				})
			}))
		}
	});
	let addr = std::net::SocketAddr::new(host, port);
	let server = hyper::Server::try_bind(&addr)?;
	info!("serving on {}", addr);
	server.serve(service).await?;
	std::panic::set_hook(hook);
	Ok(())
}
