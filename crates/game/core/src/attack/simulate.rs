//! Instance motion and expiry.

use super::AttackInstance;

/// Advances every instance by `delta_seconds`.
pub(crate) fn advance_all(instances: &mut [AttackInstance], delta_seconds: f32) {
    for instance in instances.iter_mut() {
        instance.advance(delta_seconds);
    }
}

/// Drops expired instances, returning them in their original order.
pub(crate) fn take_expired(instances: &mut Vec<AttackInstance>) -> Vec<AttackInstance> {
    let (expired, live) = std::mem::take(instances)
        .into_iter()
        .partition(AttackInstance::is_expired);
    *instances = live;
    expired
}
