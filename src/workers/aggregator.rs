// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tokio::sync::mpsc;

use crate::domain::models::probe::ProbeResult;
use crate::domain::models::result_set::ResultSet;

/// 结果通道的发送端，所有目标的所有工作者共享
pub type ResultSink = mpsc::UnboundedSender<ProbeResult>;

/// 创建结果通道
pub fn result_channel() -> (ResultSink, mpsc::UnboundedReceiver<ProbeResult>) {
    mpsc::unbounded_channel()
}

/// 汇总结果
///
/// 只能在全部工作者结束之后调用，取出通道中剩余的全部结果并按状态码分组
pub fn aggregate(receiver: &mut mpsc::UnboundedReceiver<ProbeResult>) -> ResultSet {
    let mut results = ResultSet::new();
    while let Ok(result) = receiver.try_recv() {
        results.insert(result);
    }
    results
}
