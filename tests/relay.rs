mod tests {
    use dmx_rig_composer::relay::{ARTNET_ID, ArtDmx, decode_into};
    use dmx_rig_composer::{DMX_FRAME_LEN, DmxFrame, RelayError};

    fn artdmx(declared: u16, payload: &[u8]) -> Vec<u8> {
        let mut packet = Vec::with_capacity(18 + payload.len());
        packet.extend_from_slice(ARTNET_ID);
        packet.extend_from_slice(&[0x00, 0x50]);
        packet.extend_from_slice(&[0, 14]);
        packet.extend_from_slice(&[0, 0]);
        packet.extend_from_slice(&[0, 0]);
        packet.extend_from_slice(&declared.to_be_bytes());
        packet.extend_from_slice(payload);
        packet
    }

    #[test]
    fn test_decodes_payload() {
        let mut frame = DmxFrame::new();
        let len = decode_into(&artdmx(3, &[10, 20, 30]), &mut frame).unwrap();

        assert_eq!(len, 3);
        assert_eq!(frame.head(6), &[0, 10, 20, 30, 0, 0]);
        assert!(frame.as_bytes()[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clears_previous_frame() {
        let mut frame = DmxFrame::new();
        decode_into(&artdmx(512, &[0xAA; 512]), &mut frame).unwrap();
        decode_into(&artdmx(2, &[1, 2]), &mut frame).unwrap();

        assert_eq!(frame.head(3), &[0, 1, 2]);
        assert!(frame.as_bytes()[3..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_bad_signature_leaves_frame() {
        let mut frame = DmxFrame::new();
        decode_into(&artdmx(3, &[10, 20, 30]), &mut frame).unwrap();
        let before = frame.clone();

        let mut packet = artdmx(3, &[1, 2, 3]);
        packet[0] = b'X';
        assert_eq!(decode_into(&packet, &mut frame), Err(RelayError::Signature));
        assert_eq!(frame, before);

        let mut packet = artdmx(3, &[1, 2, 3]);
        packet[7] = b'!';
        assert_eq!(decode_into(&packet, &mut frame), Err(RelayError::Signature));
        assert_eq!(frame, before);
    }

    #[test]
    fn test_other_opcodes_are_dropped() {
        let mut frame = DmxFrame::new();
        decode_into(&artdmx(1, &[5]), &mut frame).unwrap();
        let before = frame.clone();

        let mut poll = artdmx(1, &[9]);
        poll[9] = 0x20;
        assert_eq!(decode_into(&poll, &mut frame), Err(RelayError::Opcode(0x2000)));

        // byte-swapped OpDmx is not OpDmx
        let mut swapped = artdmx(1, &[9]);
        swapped[8] = 0x50;
        swapped[9] = 0x00;
        assert_eq!(decode_into(&swapped, &mut frame), Err(RelayError::Opcode(0x0050)));
        assert_eq!(frame, before);
    }

    #[test]
    fn test_truncated_header() {
        let mut frame = DmxFrame::new();
        let packet = artdmx(0, &[]);
        assert_eq!(
            decode_into(&packet[..10], &mut frame),
            Err(RelayError::Truncated(10))
        );
        assert_eq!(decode_into(&[], &mut frame), Err(RelayError::Truncated(0)));
    }

    #[test]
    fn test_length_clamped_to_universe() {
        let mut payload = vec![1u8; 512];
        payload.extend_from_slice(&[2; 12]);
        let mut frame = DmxFrame::new();

        let len = decode_into(&artdmx(0xFFFF, &payload), &mut frame).unwrap();
        assert_eq!(len, 512);
        assert_eq!(frame.as_bytes().len(), DMX_FRAME_LEN);
        assert!(frame.channels().iter().all(|&b| b == 1));
    }

    #[test]
    fn test_length_clamped_to_datagram() {
        let mut frame = DmxFrame::new();
        let len = decode_into(&artdmx(100, &[7, 8]), &mut frame).unwrap();
        assert_eq!(len, 2);
        assert_eq!(frame.head(4), &[0, 7, 8, 0]);
    }

    #[test]
    fn test_short_declared_length() {
        let packet = artdmx(1, &[4, 5, 6]);
        let parsed = ArtDmx::parse(&packet).unwrap();
        assert_eq!(parsed.data, &[4]);
    }
}
