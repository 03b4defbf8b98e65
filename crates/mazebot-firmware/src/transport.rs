//! Host link: hands the combined grid/path/navigator buffer from
//! `mazebot_core::wire` to a laptop over Wi-Fi.
//!
//! Grounded in `wifi.c`/`wifi.h`'s lwIP-based TCP server (`TCP_PORT 4242`,
//! `BUF_SIZE 2048`, `tcp_server_init`/`tcp_server_send_data`). The
//! handshake/retransmit/connection-state-machine plumbing (`tcp_server_sent`,
//! `tcp_server_result`, `tcp_server_poll`) is delegated to [`smoltcp`]'s
//! socket state machine rather than hand-rolled, per the Non-goal on
//! Wi-Fi/TCP framing — this module only exposes the thin `send` surface the
//! main loop needs.

use smoltcp::socket::tcp::Socket as TcpSocket;

/// Port the host link listens on, matching the original's `TCP_PORT`.
pub const TCP_PORT: u16 = 4242;
/// Send/receive buffer size, matching the original's `BUF_SIZE`.
pub const BUF_SIZE: usize = 2048;

/// Something the main loop can hand a wire-format buffer to.
pub trait Transport {
    type Error;

    /// Send `bytes` to the connected host, blocking until queued.
    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Errors this link's `send` can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TcpTransportError {
    /// No client has connected to the server socket yet.
    NotConnected,
    /// The socket's send buffer could not hold the whole message at once.
    SendBufferFull,
}

impl core::fmt::Display for TcpTransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TcpTransportError::NotConnected => write!(f, "no client connected"),
            TcpTransportError::SendBufferFull => write!(f, "send buffer full"),
        }
    }
}

/// Thin wrapper over a `smoltcp` TCP socket, playing the role of the
/// original's `TCP_SERVER_T` + `tcp_server_send_data`.
pub struct TcpTransport<'a> {
    socket: TcpSocket<'a>,
}

impl<'a> TcpTransport<'a> {
    pub fn new(socket: TcpSocket<'a>) -> Self {
        TcpTransport { socket }
    }

    pub fn is_connected(&self) -> bool {
        self.socket.may_send()
    }
}

impl<'a> Transport for TcpTransport<'a> {
    type Error = TcpTransportError;

    fn send(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        if !self.socket.may_send() {
            log::warn!("tcp transport: send attempted with no client connected");
            return Err(TcpTransportError::NotConnected);
        }
        let written = self
            .socket
            .send_slice(bytes)
            .map_err(|_| TcpTransportError::SendBufferFull)?;
        if written < bytes.len() {
            log::warn!(
                "tcp transport: send buffer full, wrote {written} of {} bytes",
                bytes.len()
            );
            return Err(TcpTransportError::SendBufferFull);
        }
        Ok(())
    }
}
