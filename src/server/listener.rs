// Listener module
// Creates the TCP listener the accept loop runs on.

use socket2::{Domain, Protocol, Socket, Type};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use tokio::net::TcpListener;

/// Bind a listener on the given port, all interfaces.
///
/// `SO_REUSEADDR` is set so a restart does not trip over sockets left in
/// `TIME_WAIT`. `SO_REUSEPORT` is not: a second instance on the same port
/// must fail to bind rather than silently share the socket.
///
/// Must be called from within the runtime (`TcpListener::from_std`
/// registers the socket with the reactor).
pub fn bind(port: u16) -> std::io::Result<TcpListener> {
    let addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port));

    let socket = Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind(0).expect("bind on an ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        assert!(addr.port() > 0);
    }

    #[tokio::test]
    async fn test_second_bind_on_same_port_fails() {
        let first = bind(0).expect("first bind");
        let port = first.local_addr().expect("local addr").port();
        assert!(bind(port).is_err());
    }
}
