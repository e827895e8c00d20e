mod tests {
    use embassy_time::Instant;
    use ohm_led::system::{SYSTEM_QUEUE_SIZE, SystemQueue, SystemRequest};

    fn restart_at(ms: u64) -> SystemRequest {
        SystemRequest::Restart {
            at: Instant::from_millis(ms),
        }
    }

    #[test]
    fn test_take_due_respects_time() {
        let queue = SystemQueue::new();
        queue.post(restart_at(1000)).unwrap();

        assert_eq!(queue.take_due(Instant::from_millis(999)), None);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.take_due(Instant::from_millis(1000)), Some(restart_at(1000)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_due_request_skips_ahead() {
        let queue = SystemQueue::new();
        queue.post(restart_at(5000)).unwrap();
        queue.post(restart_at(9000)).unwrap();
        queue.post(SystemRequest::FactoryReset).unwrap();
        queue.post(restart_at(7000)).unwrap();

        let now = Instant::from_millis(0);
        assert_eq!(queue.take_due(now), Some(SystemRequest::FactoryReset));
        assert_eq!(queue.take_due(now), None);

        // The rest keep their order
        let later = Instant::from_millis(10_000);
        assert_eq!(queue.take_due(later), Some(restart_at(5000)));
        assert_eq!(queue.take_due(later), Some(restart_at(9000)));
        assert_eq!(queue.take_due(later), Some(restart_at(7000)));
        assert_eq!(queue.take_due(later), None);
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let queue = SystemQueue::new();
        queue.post(SystemRequest::FactoryReset).unwrap();
        queue.post(SystemRequest::FactoryReset).unwrap();
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_full_queue_rejects() {
        let queue = SystemQueue::default();
        for i in 0..SYSTEM_QUEUE_SIZE as u64 {
            queue.post(restart_at(i)).unwrap();
        }
        assert_eq!(queue.post(restart_at(99)), Err(restart_at(99)));
        assert_eq!(queue.len(), SYSTEM_QUEUE_SIZE);
    }
}
