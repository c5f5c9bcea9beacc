//! UDP tracking transport

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use tokio::net::UdpSocket;

use vela_core::{TrackingSample, VelaError, VelaResult};
use vela_wire::encode_tracking;

use crate::sink::{SendOutcome, TrackingSink};

/// Connected UDP adapter, one tracking frame per datagram
///
/// Send attempts never block; a full socket buffer surfaces as
/// `WouldBlock` and any other socket error closes the sink for good.
pub struct UdpSink {
    socket: UdpSocket,
    peer: SocketAddr,
    closed: bool,
}

impl UdpSink {
    /// Bind an ephemeral local socket and connect it to the render host
    pub async fn connect(peer: SocketAddr) -> VelaResult<Self> {
        let bind_addr: SocketAddr = if peer.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| VelaError::TransportError(e.to_string()))?;
        socket
            .connect(peer)
            .await
            .map_err(|e| VelaError::TransportError(e.to_string()))?;

        Ok(UdpSink {
            socket,
            peer,
            closed: false,
        })
    }

    /// Get local address
    pub fn local_addr(&self) -> VelaResult<SocketAddr> {
        self.socket
            .local_addr()
            .map_err(|e| VelaError::TransportError(e.to_string()))
    }

    /// Address of the render host
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }
}

impl TrackingSink for UdpSink {
    fn try_send(&mut self, sample: &TrackingSample) -> SendOutcome {
        if self.closed {
            return SendOutcome::Closed;
        }

        let frame = encode_tracking(sample);
        match self.socket.try_send(&frame) {
            Ok(_) => SendOutcome::Sent,
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => SendOutcome::WouldBlock,
            Err(e) => {
                tracing::warn!(peer = %self.peer, error = %e, "tracking transport closed");
                self.closed = true;
                SendOutcome::Closed
            }
        }
    }
}
