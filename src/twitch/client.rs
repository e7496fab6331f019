//! Twitch chat connection.
//!
//! This module provides the [`TwitchClient`] struct wrapping a TCP connection
//! to the Twitch IRC server: authentication, channel joins, keep-alive and
//! message reception.

use anyhow::{Context, bail};
use log::{debug, error, info, warn};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines},
    net::{
        TcpStream,
        tcp::{OwnedReadHalf, OwnedWriteHalf},
    },
    sync::mpsc::{self, UnboundedReceiver},
};

use crate::{
    commands::ChatEvent,
    twitch::{OutboundSink, TwitchCredentials, message::IrcMessage},
};

/// Capabilities required to receive badges and display names.
const CAPABILITIES: &str = "twitch.tv/tags twitch.tv/commands";

/// Connection to the Twitch chat server.
///
/// Reading is done by the owner of the client through
/// [`next_event`](TwitchClient::next_event). Writing goes through a queue
/// drained by a background task, shared with every [`OutboundSink`] handed
/// out by [`sink`](TwitchClient::sink).
pub struct TwitchClient {
    /// Incoming lines from the server
    lines: Lines<BufReader<OwnedReadHalf>>,
    /// Outgoing lines to the server
    outbound: OutboundSink,
}

impl TwitchClient {
    /// Connects and authenticates to the Twitch chat server.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Login and OAuth token of the bot account
    /// * `host` - Chat server host, usually `irc.chat.twitch.tv`
    /// * `port` - Chat server plain text port, usually `6667`
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP connection cannot be established.
    /// Authentication failures are reported by the server afterwards and
    /// surface through [`next_event`](TwitchClient::next_event).
    pub async fn connect(
        credentials: &TwitchCredentials,
        host: &str,
        port: u16,
    ) -> Result<Self, anyhow::Error> {
        info!("connecting to {}:{}", host, port);

        let stream = TcpStream::connect((host, port))
            .await
            .with_context(|| format!("failed to connect to {}:{}", host, port))?;
        let (reader, writer) = stream.into_split();

        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(write_lines(writer, rx));

        let client = TwitchClient {
            lines: BufReader::new(reader).lines(),
            outbound: OutboundSink::new(tx),
        };

        let token = credentials
            .token
            .strip_prefix("oauth:")
            .unwrap_or(&credentials.token);
        client.outbound.send_raw(&format!("PASS oauth:{}", token));
        client
            .outbound
            .send_raw(&format!("NICK {}", credentials.username.to_lowercase()));
        client
            .outbound
            .send_raw(&format!("CAP REQ :{}", CAPABILITIES));

        Ok(client)
    }

    /// Returns a sink sending chat messages through this connection.
    pub fn sink(&self) -> OutboundSink {
        self.outbound.clone()
    }

    /// Joins a channel.
    pub fn join(&self, channel: &str) {
        info!("joining #{}", channel);
        self.outbound.send_raw(&format!("JOIN #{}", channel));
    }

    /// Waits for the next chat message.
    ///
    /// Server keep-alive pings are answered transparently and every other
    /// non-chat line is logged and skipped.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ChatEvent))` - A chat message was received
    /// * `Ok(None)` - The server closed the connection
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, if authentication is refused or if
    /// the server asks the bot to reconnect.
    pub async fn next_event(&mut self) -> Result<Option<ChatEvent>, anyhow::Error> {
        while let Some(line) = self
            .lines
            .next_line()
            .await
            .context("failed to read from chat server")?
        {
            let Some(message) = IrcMessage::parse(&line) else {
                continue;
            };

            match message.command.as_str() {
                "PRIVMSG" => match message.to_chat_event() {
                    Some(event) => return Ok(Some(event)),
                    None => warn!("ignoring malformed chat message: {}", line),
                },
                "PING" => {
                    let server = message.params.first().map(String::as_str).unwrap_or("");
                    self.outbound.send_raw(&format!("PONG :{}", server));
                }
                "RECONNECT" => bail!("chat server requested a reconnection"),
                "NOTICE" if is_authentication_failure(&message) => {
                    bail!("chat server refused the credentials")
                }
                "001" => info!("logged in to chat server"),
                _ => debug!("ignoring line: {}", line),
            }
        }

        Ok(None)
    }
}

/// Whether a `NOTICE` reports refused credentials.
fn is_authentication_failure(message: &IrcMessage) -> bool {
    message.params.last().is_some_and(|notice| {
        notice.contains("Login authentication failed")
            || notice.contains("Improperly formatted auth")
    })
}

/// Writes queued lines to the server until the queue or the socket closes.
async fn write_lines(mut writer: OwnedWriteHalf, mut lines: UnboundedReceiver<String>) {
    while let Some(line) = lines.recv().await {
        if !line.starts_with("PASS ") {
            debug!("> {}", line);
        }

        if let Err(e) = writer.write_all(format!("{}\r\n", line).as_bytes()).await {
            error!("failed to write to chat server: {:?}", e);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
        net::TcpListener,
    };

    use super::*;
    use crate::{auth::Role, twitch::MessageSink};

    fn credentials() -> TwitchCredentials {
        TwitchCredentials {
            username: "FrammieBot".to_string(),
            token: "oauth:secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_connect_join_and_receive() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (reader, mut writer) = stream.into_split();
            let mut lines = BufReader::new(reader).lines();

            let mut received = Vec::new();
            for _ in 0..4 {
                received.push(lines.next_line().await.unwrap().unwrap());
            }

            writer
                .write_all(
                    b"PING :tmi.twitch.tv\r\n\
                    @badges=moderator/1;display-name=Modo :modo!modo@modo.tmi.twitch.tv PRIVMSG #streamer :!bet start\r\n",
                )
                .await
                .unwrap();

            // PONG then the bot reply
            for _ in 0..2 {
                received.push(lines.next_line().await.unwrap().unwrap());
            }
            received
        });

        let mut client = TwitchClient::connect(&credentials(), "127.0.0.1", port)
            .await
            .unwrap();
        client.join("streamer");

        let event = client.next_event().await.unwrap().unwrap();
        assert_eq!(event.channel, "streamer");
        assert_eq!(event.body, "!bet start");
        assert!(event.actor.has_role(Role::Moderator));

        client.sink().send("streamer", "hello");

        let received = server.await.unwrap();
        assert_eq!(
            received,
            vec![
                "PASS oauth:secret",
                "NICK frammiebot",
                "CAP REQ :twitch.tv/tags twitch.tv/commands",
                "JOIN #streamer",
                "PONG :tmi.twitch.tv",
                "PRIVMSG #streamer :hello",
            ]
        );
    }

    #[tokio::test]
    async fn test_next_event_connection_closed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            drop(stream);
        });

        let mut client = TwitchClient::connect(&credentials(), "127.0.0.1", port)
            .await
            .unwrap();

        assert!(client.next_event().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_next_event_reconnect_request() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            stream
                .write_all(b":tmi.twitch.tv RECONNECT\r\n")
                .await
                .unwrap();
            // Keep the socket open until the client gives up
            let mut buffer = Vec::new();
            let _ = tokio::io::AsyncReadExt::read_to_end(&mut stream, &mut buffer).await;
        });

        let mut client = TwitchClient::connect(&credentials(), "127.0.0.1", port)
            .await
            .unwrap();

        assert!(client.next_event().await.is_err());
    }
}
