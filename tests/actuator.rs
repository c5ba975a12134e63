mod common;

mod tests {
    use light_therapy::{LightActuator, Rgb, actuator::DEFAULT_TRANSPORT_ADDRESS};

    use super::common::RecordingTransport;

    #[test]
    fn test_connect_reports_reachability() {
        let actuator: LightActuator<_, 3> =
            LightActuator::connect(RecordingTransport::reachable(), DEFAULT_TRANSPORT_ADDRESS);
        assert!(actuator.is_connected());
        assert_eq!(
            actuator.transport().address.as_deref(),
            Some("localhost:7890")
        );

        let actuator: LightActuator<_, 3> =
            LightActuator::connect(RecordingTransport::default(), DEFAULT_TRANSPORT_ADDRESS);
        assert!(!actuator.is_connected());
        assert_eq!(actuator.transport().writes, 0);
    }

    #[test]
    fn test_apply_scales_every_channel() {
        let mut actuator: LightActuator<_, 3> = LightActuator::new(RecordingTransport::reachable());

        actuator.apply(255, Rgb::new(255, 180, 50));
        assert_eq!(actuator.transport().last_frame, vec![Rgb::new(255, 180, 50); 3]);

        actuator.apply(140, Rgb::new(255, 180, 50));
        assert_eq!(actuator.transport().last_frame, vec![Rgb::new(140, 98, 27); 3]);

        actuator.apply(0, Rgb::new(255, 255, 255));
        assert_eq!(actuator.transport().last_frame, vec![Rgb::new(0, 0, 0); 3]);
        assert_eq!(actuator.transport().writes, 3);
    }

    #[test]
    fn test_off_writes_black() {
        let mut actuator: LightActuator<_, 2> = LightActuator::new(RecordingTransport::reachable());
        actuator.apply(200, Rgb::new(255, 255, 255));
        actuator.off();
        assert_eq!(actuator.frame(), &[Rgb::new(0, 0, 0); 2]);
        assert_eq!(actuator.transport().last_frame, vec![Rgb::new(0, 0, 0); 2]);
    }

    #[test]
    fn test_unreachable_transport_keeps_going() {
        let mut actuator: LightActuator<_, 2> = LightActuator::connect(
            RecordingTransport {
                failing: true,
                ..RecordingTransport::default()
            },
            DEFAULT_TRANSPORT_ADDRESS,
        );
        actuator.apply(100, Rgb::new(255, 255, 255));
        actuator.apply(150, Rgb::new(255, 255, 255));
        assert_eq!(actuator.transport().writes, 2);
        // The frame is still tracked locally
        assert_eq!(actuator.frame(), &[Rgb::new(150, 150, 150); 2]);
    }
}
