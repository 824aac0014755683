#[cfg(test)]
mod byte_stream_tests {
    use std::io;
    use std::io::Cursor;

    use super::super::{
        ByteSink, ByteSource, FnByteSink, FnByteSource, ReadByteSource, SliceByteSource,
        WriteByteSink,
    };
    use crate::codec_error::IntegerDecodingError;

    #[test]
    fn slice_source_tracks_position() {
        let bytes = [0x01, 0x02, 0x03];
        let mut source = SliceByteSource::new(&bytes);
        assert_eq!(source.next_byte().unwrap(), 0x01);
        assert_eq!(source.position(), 1);
        assert_eq!(source.remaining(), &[0x02, 0x03]);
        assert!(!source.is_exhausted());
        source.next_byte().unwrap();
        source.next_byte().unwrap();
        assert!(source.is_exhausted());
    }

    #[test]
    fn slice_source_reports_end_of_input() {
        let mut source = SliceByteSource::new(&[0x7F]);
        source.next_byte().unwrap();
        assert!(matches!(
            source.next_byte(),
            Err(IntegerDecodingError::UnexpectedEndOfInput { position: 1 })
        ));
    }

    #[test]
    fn read_source_surfaces_io_errors() {
        let mut source = ReadByteSource::new(Cursor::new(vec![0xAB]));
        assert_eq!(source.next_byte().unwrap(), 0xAB);
        match source.next_byte() {
            Err(IntegerDecodingError::Io(e)) => {
                assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof)
            }
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn fn_source_calls_closure_per_byte() {
        let mut calls = 0;
        let mut source = FnByteSource(|| -> Result<u8, ()> {
            calls += 1;
            Ok(0x2A)
        });
        assert_eq!(source.next_byte(), Ok(0x2A));
        assert_eq!(source.next_byte(), Ok(0x2A));
        drop(source);
        assert_eq!(calls, 2);
    }

    fn take_one<S: ByteSource>(mut source: S) -> Result<u8, S::Error> {
        source.next_byte()
    }

    #[test]
    fn borrowed_source_advances_original() {
        let bytes = [0x05, 0x06];
        let mut source = SliceByteSource::new(&bytes);
        assert_eq!(take_one(&mut source).unwrap(), 0x05);
        assert_eq!(source.position(), 1);
    }

    #[test]
    fn vec_sink_appends() {
        let mut sink: Vec<u8> = vec![0x01];
        sink.write_byte(0x02).unwrap();
        assert_eq!(sink, vec![0x01, 0x02]);
    }

    #[test]
    fn write_sink_writes_through() {
        let mut sink = WriteByteSink::new(Vec::new());
        sink.write_byte(0x80).unwrap();
        sink.write_byte(0x01).unwrap();
        assert_eq!(sink.into_inner(), vec![0x80, 0x01]);
    }

    #[test]
    fn fn_sink_passes_error_through() {
        let mut sink = FnByteSink(|byte: u8| if byte == 0 { Err("zero") } else { Ok(()) });
        assert_eq!(sink.write_byte(1), Ok(()));
        assert_eq!(sink.write_byte(0), Err("zero"));
    }
}
