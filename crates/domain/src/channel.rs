//! 事件分发边界
//!
//! 分发是同步的：`publish` 返回时所有监听器都已执行完毕，调用方
//! 随后在同一实例上检查取消标志与被改写的负载。监听器的执行顺序
//! 由具体分发器决定，本边界只要求"全部执行完再返回"。
//!
//! 每个事件实例只属于一条触发路径，实例之间没有共享可变状态，
//! 因此并发的触发路径各自持有独立实例即可，无需跨实例同步。

use crate::events::Event;

/// 事件监听器
pub trait EventListener: Send + Sync {
    /// 处理一个事件
    ///
    /// 通过可变引用可以改写消息负载或取消可取消事件；监听器不能
    /// 构造新事件，事件的构造能力保留在触发路径内部。
    fn on_event(&self, event: &mut Event);
}

/// 事件通道
///
/// 事件实例经可变借用传入，分发结束后调用方仍持有同一实例，
/// 保证"广播后检查"读到的就是监听器看到的那份状态。
pub trait EventChannel: Send + Sync {
    /// 广播一个事件，阻塞直到所有监听器执行完毕
    fn publish(&self, event: &mut Event);
}
