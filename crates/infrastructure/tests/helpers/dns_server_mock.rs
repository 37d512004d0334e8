#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{CNAME, TXT};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio_util::sync::CancellationToken;

/// What the mock nameserver sends back for every query on one protocol.
#[derive(Debug, Clone)]
pub enum Reply {
    /// One TXT record per string.
    Txt(Vec<String>),
    /// One TXT record made of several character-strings.
    TxtSegments(Vec<String>),
    Cname(String),
    /// NOERROR with an empty answer section.
    Empty,
    Rcode(ResponseCode),
    /// TC bit set, no answers.
    Truncated,
    /// Valid TXT answer under another message id.
    WrongId,
    /// Bytes that do not parse as a DNS message.
    Garbage,
    /// Never reply.
    Silent,
}

impl Reply {
    pub fn txt(value: &str) -> Self {
        Reply::Txt(vec![value.to_string()])
    }
}

/// Authoritative nameserver stand-in on loopback, UDP and TCP on one port.
pub struct MockDnsServer {
    addr: SocketAddr,
    udp_requests: Arc<Mutex<Vec<Vec<u8>>>>,
    tcp_requests: Arc<Mutex<Vec<Vec<u8>>>>,
    shutdown: CancellationToken,
}

impl MockDnsServer {
    pub async fn start(udp_reply: Reply, tcp_reply: Reply) -> Self {
        let (udp, tcp) = bind_pair().await;
        let addr = udp.local_addr().unwrap();

        let server = Self {
            addr,
            udp_requests: Arc::new(Mutex::new(Vec::new())),
            tcp_requests: Arc::new(Mutex::new(Vec::new())),
            shutdown: CancellationToken::new(),
        };

        tokio::spawn(serve_udp(
            udp,
            udp_reply,
            server.udp_requests.clone(),
            server.shutdown.clone(),
        ));
        tokio::spawn(serve_tcp(
            tcp,
            tcp_reply,
            server.tcp_requests.clone(),
            server.shutdown.clone(),
        ));

        server
    }

    /// Same reply on both protocols.
    pub async fn answering(reply: Reply) -> Self {
        Self::start(reply.clone(), reply).await
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn nameserver(&self) -> String {
        self.addr.to_string()
    }

    pub fn udp_requests(&self) -> Vec<Vec<u8>> {
        self.udp_requests.lock().unwrap().clone()
    }

    pub fn tcp_requests(&self) -> Vec<Vec<u8>> {
        self.tcp_requests.lock().unwrap().clone()
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn bind_pair() -> (UdpSocket, TcpListener) {
    for _ in 0..16 {
        let udp = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = udp.local_addr().unwrap();
        if let Ok(tcp) = TcpListener::bind(addr).await {
            return (udp, tcp);
        }
    }
    panic!("could not bind UDP and TCP on the same loopback port");
}

async fn serve_udp(
    socket: UdpSocket,
    reply: Reply,
    requests: Arc<Mutex<Vec<Vec<u8>>>>,
    shutdown: CancellationToken,
) {
    let mut buf = vec![0u8; 4096];
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            result = socket.recv_from(&mut buf) => {
                let Ok((len, peer)) = result else { continue };
                let query = buf[..len].to_vec();
                requests.lock().unwrap().push(query.clone());
                if let Some(response) = build_reply(&query, &reply) {
                    let _ = socket.send_to(&response, peer).await;
                }
            }
        }
    }
}

async fn serve_tcp(
    listener: TcpListener,
    reply: Reply,
    requests: Arc<Mutex<Vec<Vec<u8>>>>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            result = listener.accept() => {
                let Ok((stream, _)) = result else { continue };
                tokio::spawn(handle_tcp(stream, reply.clone(), requests.clone()));
            }
        }
    }
}

async fn handle_tcp(mut stream: TcpStream, reply: Reply, requests: Arc<Mutex<Vec<Vec<u8>>>>) {
    let mut len_buf = [0u8; 2];
    if stream.read_exact(&mut len_buf).await.is_err() {
        return;
    }
    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
    if stream.read_exact(&mut query).await.is_err() {
        return;
    }
    requests.lock().unwrap().push(query.clone());

    if let Some(response) = build_reply(&query, &reply) {
        let len = (response.len() as u16).to_be_bytes();
        let _ = stream.write_all(&len).await;
        let _ = stream.write_all(&response).await;
        let _ = stream.flush().await;
    }
}

fn build_reply(query_bytes: &[u8], reply: &Reply) -> Option<Vec<u8>> {
    match reply {
        Reply::Silent => return None,
        Reply::Garbage => return Some(vec![0xde, 0xad, 0xbe]),
        _ => {}
    }

    let query = Message::from_vec(query_bytes).ok()?;
    let question = query.queries().first()?.clone();
    let owner = question.name().clone();

    let mut response = Message::new();
    response.set_id(query.id());
    response.set_message_type(MessageType::Response);
    response.set_op_code(query.op_code());
    response.set_authoritative(true);
    response.add_query(question);

    match reply {
        Reply::Txt(values) => {
            for value in values {
                response.add_answer(txt_record(&owner, vec![value.clone()]));
            }
        }
        Reply::TxtSegments(segments) => {
            response.add_answer(txt_record(&owner, segments.clone()));
        }
        Reply::Cname(target) => {
            let target = Name::from_str(target).ok()?;
            response.add_answer(Record::from_rdata(owner, 300, RData::CNAME(CNAME(target))));
        }
        Reply::Empty => {}
        Reply::Rcode(rcode) => {
            response.set_response_code(*rcode);
        }
        Reply::Truncated => {
            response.set_truncated(true);
        }
        Reply::WrongId => {
            response.set_id(query.id().wrapping_add(1));
            response.add_answer(txt_record(&owner, vec!["abc123".to_string()]));
        }
        Reply::Garbage | Reply::Silent => unreachable!(),
    }

    response.to_vec().ok()
}

fn txt_record(owner: &Name, segments: Vec<String>) -> Record {
    Record::from_rdata(owner.clone(), 300, RData::TXT(TXT::new(segments)))
}
