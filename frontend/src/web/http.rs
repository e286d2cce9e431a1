//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 实现共享层的 [`HttpClient`] 接口。

use busbook_shared::protocol::HttpMethod;
use busbook_shared::request::{FilePart, HttpClient, HttpRequest, HttpResponse, RequestBody};
use busbook_shared::{ClientError, ClientResult};
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FormData};

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

/// 将文件字段组装为 `FormData`
fn form_data(parts: &[FilePart]) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for part in parts {
        let bytes = js_sys::Uint8Array::from(part.data.as_slice());
        let options = BlobPropertyBag::new();
        options.set_type(&part.content_type);
        let blob =
            Blob::new_with_u8_array_sequence_and_options(&js_sys::Array::of1(&bytes), &options)?;
        form.append_with_blob_and_filename(&part.field, &blob, &part.file_name)?;
    }
    Ok(form)
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder = builder(req.method, &req.url);
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            None => builder.build(),
            Some(RequestBody::Json(body)) => builder.body(body),
            Some(RequestBody::Multipart(parts)) => {
                let form = form_data(&parts).map_err(|e| {
                    ClientError::transport(format!("Failed to build form data: {:?}", e))
                })?;
                builder.body(form)
            }
        }
        .map_err(|e| ClientError::transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::transport(e.to_string()))?;

        // 读取失败按空响应体处理，由上层退化为空对象
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}

/// 读取用户选择的文件，转换为 multipart 字段
pub async fn read_file_part(field: &str, file: &File) -> Result<FilePart, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let data = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(FilePart {
        field: field.to_string(),
        file_name: file.name(),
        content_type: file.type_(),
        data,
    })
}
