use crate::View;

impl bytes::Buf for View<'_> {
    fn remaining(&self) -> usize {
        self.len()
    }

    fn chunk(&self) -> &[u8] {
        self.as_bytes()
    }

    fn advance(&mut self, cnt: usize) {
        assert!(
            cnt <= self.len(),
            "cannot advance past `remaining`: {cnt} > {}",
            self.len()
        );
        self.skip_first(cnt);
    }
}

impl From<View<'static>> for bytes::Bytes {
    /// Wraps the static bytes without copying.
    fn from(value: View<'static>) -> Self {
        bytes::Bytes::from_static(value.as_bytes())
    }
}
