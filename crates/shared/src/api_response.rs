//! # API レスポンスエンベロープ
//!
//! 公開 API の統一レスポンス形式 `{ "data": [T] | null, "code": u16, "message": String }`
//! を提供する。リクエストごとに生成され、永続化されない。

use serde::{Deserialize, Serialize};

/// 成功時のメッセージ
pub const OK_MESSAGE: &str = "OK";

/// 公開 API の統一レスポンス型
///
/// 成功時は `data` に 0 件以上のレコードを持ち、失敗時は `data` が `null` になる。
/// `code` には HTTP ステータスと同じ値を入れる。
///
/// ## 使用例
///
/// ```
/// use orderflow_shared::ApiResponse;
///
/// let response = ApiResponse::ok(vec!["hello"]);
/// assert_eq!(response.code, 200);
/// assert_eq!(response.message, "OK");
///
/// let failure = ApiResponse::<&str>::failure(404, "Not found");
/// assert!(failure.data.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data:    Option<Vec<T>>,
    pub code:    u16,
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// 新しい `ApiResponse` を作成する
    pub fn new(data: Option<Vec<T>>, code: u16, message: impl Into<String>) -> Self {
        Self {
            data,
            code,
            message: message.into(),
        }
    }

    /// 200 OK
    pub fn ok(data: Vec<T>) -> Self {
        Self::new(Some(data), 200, OK_MESSAGE)
    }

    /// データなしの失敗レスポンス
    pub fn failure(code: u16, message: impl Into<String>) -> Self {
        Self::new(None, code, message)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_okを正しいjson形状にする() {
        let response = ApiResponse::ok(vec!["a", "b"]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "data": ["a", "b"], "code": 200, "message": "OK" })
        );
    }

    #[test]
    fn test_failureではdataがnullになる() {
        let response = ApiResponse::<String>::failure(500, "Internal error");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "data": null, "code": 500, "message": "Internal error" })
        );
    }

    #[test]
    fn test_空のvecはnullではなく空配列になる() {
        let response = ApiResponse::<i32>::ok(Vec::new());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[test]
    fn test_deserializeでjsonからオブジェクトに変換する() {
        let json = r#"{"data": null, "code": 404, "message": "Not found"}"#;
        let response: ApiResponse<String> = serde_json::from_str(json).unwrap();

        assert_eq!(response, ApiResponse::failure(404, "Not found"));
    }
}
