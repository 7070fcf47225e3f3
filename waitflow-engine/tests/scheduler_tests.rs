// tests/scheduler_tests.rs
//! Timer arming, immediate firing of elapsed waits, and cancellation.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use tokio::sync::mpsc::error::TryRecvError;
use waitflow_engine::{ScheduledWait, SchedulerError, SystemClock, TimerScheduler, WaitScheduler};

fn wait_at(fire_at: chrono::DateTime<Utc>) -> ScheduledWait {
    ScheduledWait {
        timer_id: "t-1".to_string(),
        run_id: "run-1".to_string(),
        state_name: "Wait1".to_string(),
        fire_at,
    }
}

#[tokio::test]
async fn resumption_is_delivered_after_the_wait() {
    let (scheduler, mut rx) = TimerScheduler::new(Arc::new(SystemClock));

    let handle = scheduler
        .schedule(wait_at(Utc::now() + ChronoDuration::milliseconds(200)))
        .await
        .unwrap();
    assert_eq!(handle.timer_id(), "t-1");

    // not fired yet
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

    let resumption = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timer did not fire")
        .unwrap();
    assert_eq!(resumption.timer_id, "t-1");
    assert_eq!(resumption.run_id, "run-1");
    assert_eq!(resumption.state_name, "Wait1");
}

#[tokio::test]
async fn elapsed_fire_at_fires_immediately() {
    let (scheduler, mut rx) = TimerScheduler::new(Arc::new(SystemClock));

    scheduler
        .schedule(wait_at(Utc::now() - ChronoDuration::seconds(3600)))
        .await
        .unwrap();

    let resumption = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("elapsed timer did not fire immediately")
        .unwrap();
    assert_eq!(resumption.timer_id, "t-1");
}

#[tokio::test]
async fn cancelled_timer_never_fires() {
    let (scheduler, mut rx) = TimerScheduler::new(Arc::new(SystemClock));

    let handle = scheduler
        .schedule(wait_at(Utc::now() + ChronoDuration::milliseconds(100)))
        .await
        .unwrap();
    handle.cancel();

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn schedule_fails_once_the_receiver_is_gone() {
    let (scheduler, rx) = TimerScheduler::new(Arc::new(SystemClock));
    drop(rx);

    let err = scheduler.schedule(wait_at(Utc::now())).await.unwrap_err();
    assert!(matches!(err, SchedulerError::ChannelClosed));
}
