//! 數值工具：捨入、夾限與計數轉換

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// `num / 10^scale`，供調校係數常數使用
pub(crate) const fn ratio(num: u32, scale: u32) -> Decimal {
    Decimal::from_parts(num, 0, 0, false, scale)
}

const HALF: Decimal = ratio(5, 1);

/// 四捨五入至整數（.5 一律往正無窮方向）
pub fn round_half_up(value: Decimal) -> Decimal {
    // 接近上限的值已無小數位
    value.checked_add(HALF).unwrap_or(value).floor()
}

/// 溢位時的飽和值
fn saturate(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// 乘法，溢位時飽和至 `Decimal::MAX` / `Decimal::MIN`
pub fn saturating_mul(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs)
        .unwrap_or_else(|| saturate(lhs.is_sign_negative() != rhs.is_sign_negative()))
}

/// 除法，溢位時飽和；除數為零時回傳 0
pub fn saturating_div(lhs: Decimal, rhs: Decimal) -> Decimal {
    if rhs.is_zero() {
        return Decimal::ZERO;
    }
    lhs.checked_div(rhs)
        .unwrap_or_else(|| saturate(lhs.is_sign_negative() != rhs.is_sign_negative()))
}

/// 加法，溢位時飽和
pub fn saturating_add(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_add(rhs).unwrap_or_else(|| saturate(rhs.is_sign_negative()))
}

/// 減法，溢位時飽和
pub fn saturating_sub(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_sub(rhs).unwrap_or_else(|| saturate(!rhs.is_sign_negative()))
}

/// 保留一位小數（.x5 遠離零）
pub fn round1(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// 四捨五入後不小於零
pub fn round_non_negative(value: Decimal) -> Decimal {
    round_half_up(value).max(Decimal::ZERO)
}

/// 四捨五入後轉為計數，負值為 0，超出範圍則飽和
pub fn to_count(value: Decimal) -> u32 {
    let rounded = round_non_negative(value);
    rounded.to_u32().unwrap_or(u32::MAX)
}
