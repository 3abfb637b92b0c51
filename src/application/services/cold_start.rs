//! Cold Start Timer
//!
//! レスポンスが遅い場合にサービスの起動待ちを知らせるワンショットタイマー

use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

/// コールドスタート判定までの既定時間
pub const DEFAULT_COLD_START_DELAY: Duration = Duration::from_millis(3000);

/// ワンショットのコールドスタートタイマー
///
/// 親トークンの子トークンを持つため、送信全体が中断されるとタイマーも止まる
pub struct ColdStartTimer {
    token: CancellationToken,
    delay: Duration,
}

impl ColdStartTimer {
    /// 送信開始時にタイマーを作成
    pub fn start(parent: &CancellationToken, delay: Duration) -> Self {
        Self {
            token: parent.child_token(),
            delay,
        }
    }

    /// 経過を待つ
    ///
    /// 時間が経過すれば `true`、先に取り消されれば `false`。
    /// 取り消し後は決して `true` を返さない
    pub async fn elapsed(&self) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => false,
            _ = sleep(self.delay) => true,
        }
    }

    /// タイマーを取り消す
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
