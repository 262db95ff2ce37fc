//! "종목 전망 검색": ticker or company name → raw info script → LLM outlook

pub mod api;
mod page;

pub use page::StockForecastPage;

use contracts::shared::proxy::ChatRequest;

pub const INPUT_PLACEHOLDER: &str = "확인하고자 하는 종목명, 혹은 티커를 입력해주세요.";

const SYSTEM_PROMPT: &str = "너는 한국 주식 시장을 분석하는 애널리스트다. \
주어진 종목 정보만을 근거로 향후 주가 전망을 간결하게 한국어로 정리하라.";

pub const CAROUSEL_IMAGES: [&str; 7] = [
    "assets/imgs/stock_forecast/carousel_celltrion.svg",
    "assets/imgs/stock_forecast/carousel_hmc.svg",
    "assets/imgs/stock_forecast/carousel_kakao.svg",
    "assets/imgs/stock_forecast/carousel_kia.svg",
    "assets/imgs/stock_forecast/carousel_posco.svg",
    "assets/imgs/stock_forecast/carousel_samsung.svg",
    "assets/imgs/stock_forecast/carousel_skhy.svg",
];

/// Prompt for the outlook: the user's query plus whatever the script printed
pub fn build_chat_request(user_input: &str, raw_info: &str) -> ChatRequest {
    ChatRequest {
        system: SYSTEM_PROMPT.to_string(),
        prompt: format!(
            "종목: {}\n\n[종목 정보]\n{}",
            user_input.trim(),
            raw_info.trim()
        ),
    }
}

/// `choices[0].message.content` of a chat completion payload
pub fn completion_text(payload: &serde_json::Value) -> Option<String> {
    payload
        .pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Carousel track: the last two images, all images, then all images again
/// so the scroll can wrap without a visible jump.
pub fn carousel_track() -> Vec<&'static str> {
    let n = CAROUSEL_IMAGES.len();
    let mut track = Vec::with_capacity(n * 2 + 2);
    track.extend_from_slice(&CAROUSEL_IMAGES[n - 2..]);
    track.extend_from_slice(&CAROUSEL_IMAGES);
    track.extend_from_slice(&CAROUSEL_IMAGES);
    track
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chat_request() {
        let req = build_chat_request("  삼성전자 ", "PER 12.3\n");
        assert_eq!(req.system, SYSTEM_PROMPT);
        assert_eq!(req.prompt, "종목: 삼성전자\n\n[종목 정보]\nPER 12.3");
    }

    #[test]
    fn test_completion_text() {
        let payload = serde_json::json!({
            "choices": [ { "message": { "role": "assistant", "content": " 상승 전망 \n" } } ]
        });
        assert_eq!(completion_text(&payload).as_deref(), Some("상승 전망"));

        assert_eq!(completion_text(&serde_json::json!({ "choices": [] })), None);
        let blank = serde_json::json!({ "choices": [ { "message": { "content": "  " } } ] });
        assert_eq!(completion_text(&blank), None);
    }

    #[test]
    fn test_carousel_track() {
        let track = carousel_track();
        assert_eq!(track.len(), 16);
        assert_eq!(track[0], CAROUSEL_IMAGES[5]);
        assert_eq!(track[1], CAROUSEL_IMAGES[6]);
        assert_eq!(track[2], CAROUSEL_IMAGES[0]);
        assert_eq!(track[15], CAROUSEL_IMAGES[6]);
    }
}
