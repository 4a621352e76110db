//! Assistant reply catalog.
//!
//! All user-facing texts of the advisor, in the source locale. The engine
//! picks from here so wording lives in one place.

use crate::domain::classification::Classification;
use crate::domain::deduction::{DeductionReason, Verdict};

/// Greeting plus the opening industry question.
pub fn greeting() -> &'static str {
    "안녕하세요! 😊 차량 관련 부가가치세 매입세액 공제 여부를 도와드릴게요.\n\n어떤 **업종**에 종사하시나요?"
}

/// Verdict for a directly deductible industry.
pub fn industry_deductible() -> &'static str {
    "✅ 차량 관련 비용 부가가치세 매입공제 **공제가능합니다.**\n\n(택시·자동차학원·자동차임대업 등은 차량을 직접 사용하므로 공제대상입니다.)"
}

/// Prompt for the vehicle name after the industry did not qualify.
pub fn ask_vehicle() -> &'static str {
    "알겠습니다. 업종에 따라 직접 공제는 불가하네요.\n이제 **차량명**을 알려주세요. (예: 소나타, 스타렉스 9인승, 봉고 화물 등)"
}

/// Short report of what the classifier made of the vehicle text.
pub fn classification_report(vehicle: &str, classification: &Classification) -> String {
    let estimated = classification
        .top_tag()
        .map(|tag| tag.label())
        .unwrap_or("미상");
    let seats = classification
        .seats_detected()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "미기재".to_string());

    let mut report = format!(
        "입력하신 차량은 **{}** 입니다.\n추정 유형: **{}**, 좌석수: **{}**",
        vehicle, estimated, seats
    );
    if let Some(rationale) = classification.rationale() {
        report.push_str(&format!("\n근거: {}", rationale));
    }
    report
}

/// Verdict for a light or cargo vehicle.
pub fn vehicle_type_deductible() -> &'static str {
    "✅ 경차 또는 화물차이므로 차량 관련 비용 부가가치세 매입공제 **공제가능합니다.**"
}

/// Follow-up question for the seat count of a van/bus.
pub fn ask_seats() -> &'static str {
    "몇 인승 차량인가요? 숫자만 입력해주세요 (예: 9)"
}

/// Verdict for a van with more than eight seats.
pub fn seats_deductible(seats: u32) -> String {
    format!(
        "🚐 {}인승 승합차는 8인승 초과이므로 ✅ **공제가능합니다.**",
        seats
    )
}

/// Verdict for a van with eight seats or fewer.
pub fn seats_non_deductible(seats: u32) -> String {
    format!(
        "🚐 {}인승 승합차는 8인승 이하이므로 ❌ **공제불가능합니다.**",
        seats
    )
}

/// Verdict for an ordinary passenger vehicle.
pub fn passenger_non_deductible() -> &'static str {
    "❌ 개별소비세 과세 대상 차량이므로 부가가치세 매입세액 **공제 불가능합니다.**\n\n(일반 승용차는 공제 대상이 아닙니다.)"
}

/// Re-prompt after a non-numeric seat answer.
pub fn seat_retry() -> &'static str {
    "숫자로 입력해주세요. (예: 9)"
}

/// Fixed reply once the conversation is finished.
pub fn restart_hint() -> &'static str {
    "대화를 다시 시작하려면 🔄 **대화 초기화** 버튼을 눌러주세요."
}

/// The reply matching a terminal verdict.
pub fn verdict_reply(verdict: &Verdict) -> String {
    match verdict.reason() {
        DeductionReason::IndustryDirectUse => industry_deductible().to_string(),
        DeductionReason::VehicleType => vehicle_type_deductible().to_string(),
        DeductionReason::SeatCount { seats } => {
            if verdict.is_deductible() {
                seats_deductible(seats)
            } else {
                seats_non_deductible(seats)
            }
        }
        DeductionReason::PassengerVehicleDefault => passenger_non_deductible().to_string(),
    }
}
