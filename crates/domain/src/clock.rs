//! # Clock（時刻プロバイダ）
//!
//! ユースケース層での `Utc::now()` 直接呼び出しを置き換え、
//! テストで固定時刻を注入可能にする。
//!
//! PostgreSQL の `TIMESTAMPTZ` はマイクロ秒精度のため、[`SystemClock`] は
//! マイクロ秒未満を切り捨てる。作成直後のレスポンスと再取得した値が一致する。

use chrono::{DateTime, SubsecRound, Utc};

/// 保存時刻の小数秒の桁数（マイクロ秒）
const STORED_SUBSEC_DIGITS: u16 = 6;

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;
}

/// システム時刻をマイクロ秒精度で返す実装
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now().trunc_subsecs(STORED_SUBSEC_DIGITS)
   }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
   now: DateTime<Utc>,
}

impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self { now }
   }
}

impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.now
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_system_clockはマイクロ秒未満を切り捨てる() {
      let now = SystemClock.now();

      assert_eq!(now.timestamp_subsec_nanos() % 1_000, 0);
   }

   #[test]
   fn test_system_clockは呼び出し時点の時刻を返す() {
      let before = Utc::now().trunc_subsecs(STORED_SUBSEC_DIGITS);
      let result = SystemClock.now();
      let after = Utc::now();

      assert!(result >= before);
      assert!(result <= after);
   }

   #[test]
   fn test_fixed_clockは何度呼んでも同じ時刻を返す() {
      let fixed = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
      let clock = FixedClock::new(fixed);

      assert_eq!(clock.now(), fixed);
      assert_eq!(clock.now(), fixed);
   }
}
