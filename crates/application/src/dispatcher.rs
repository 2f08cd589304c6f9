//! 本地同步事件分发器

use std::sync::{Arc, RwLock};

use domain::{Event, EventChannel, EventListener};
use tracing::debug;

/// 本地事件分发器
///
/// 监听器按注册顺序同步执行，`publish` 返回时全部监听器已执行
/// 完毕。锁只保护监听器注册表；事件实例本身不跨触发路径共享，
/// 无需加锁。
#[derive(Default)]
pub struct LocalEventChannel {
    listeners: RwLock<Vec<Arc<dyn EventListener>>>,
}

impl LocalEventChannel {
    /// 创建空的分发器
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// 注册一个监听器
    pub fn register(&self, listener: Arc<dyn EventListener>) {
        let mut listeners = match self.listeners.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        listeners.push(listener);
    }

    /// 注册一个闭包监听器
    pub fn register_fn<F>(&self, f: F)
    where
        F: Fn(&mut Event) + Send + Sync + 'static,
    {
        self.register(Arc::new(FnListener::new(f)));
    }

    /// 已注册的监听器数量
    pub fn listener_count(&self) -> usize {
        match self.listeners.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// 快照当前监听器列表；分发期间注册的监听器从下一次分发开始生效
    fn snapshot(&self) -> Vec<Arc<dyn EventListener>> {
        match self.listeners.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventChannel for LocalEventChannel {
    fn publish(&self, event: &mut Event) {
        let listeners = self.snapshot();
        debug!(
            event_type = event.event_type(),
            listeners = listeners.len(),
            "分发事件"
        );
        for listener in listeners {
            listener.on_event(event);
        }
    }
}

/// 把闭包适配成监听器
pub struct FnListener<F> {
    f: F,
}

impl<F> FnListener<F>
where
    F: Fn(&mut Event) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventListener for FnListener<F>
where
    F: Fn(&mut Event) + Send + Sync,
{
    fn on_event(&self, event: &mut Event) {
        (self.f)(event)
    }
}
