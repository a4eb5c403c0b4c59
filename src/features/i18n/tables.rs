//! Static string tables, one per language

pub(super) const ID: &[(&str, &str)] = &[
    // paging
    ("paging.page", "Halaman"),
    ("paging.of", "dari"),
    ("paging.search", "Cari"),
    ("paging.home", "Kembali"),
    ("paging.layout", "Tampilan"),
    ("paging.layout_columns", "Tampilan Dua Kolom"),
    ("paging.layout_list", "Tampilan Daftar"),
    ("paging.empty", "*Tidak ada data*"),
    // common
    ("common.error_title", "Terjadi Kesalahan"),
    ("common.error_body", "Gagal memproses perintah. Silakan coba lagi nanti."),
    ("common.unavailable", "Layanan sedang tidak tersedia. Silakan coba lagi nanti."),
    ("common.guild_only", "Perintah ini hanya bisa digunakan di dalam server."),
    ("common.no_permission", "Kamu memerlukan izin **Manage Server** untuk perintah ini."),
    ("common.owner_only", "Perintah ini hanya untuk pemilik bot."),
    ("common.expired", "Tampilan ini sudah kedaluwarsa. Jalankan perintahnya lagi."),
    ("common.unknown_command", "Perintah tidak dikenal."),
    // cooldown
    ("cooldown.title", "Terlalu Cepat"),
    ("cooldown.wait", "Tunggu {seconds} detik sebelum menggunakan perintah ini lagi."),
    // utility
    ("ping.response", "🏓 Pong! Latensi: {latency} ms"),
    ("info.title", "ℹ️ Tentang {name}"),
    ("info.version", "Versi"),
    ("info.uptime", "Waktu Aktif"),
    ("info.servers", "Server"),
    ("info.commands", "Perintah Dijalankan"),
    ("info.source", "Kode Sumber"),
    ("stats.title", "📊 Statistik Penggunaan"),
    ("stats.total", "Total Perintah"),
    ("stats.users", "Pengguna Unik"),
    ("stats.top", "Perintah Teratas"),
    ("stats.none", "Belum ada data"),
    // settings
    ("prefix.current", "Prefix saat ini: `{prefix}`"),
    ("prefix.changed", "Prefix diubah menjadi `{prefix}`"),
    ("prefix.invalid", "Prefix harus 1-5 karakter tanpa spasi."),
    ("language.current", "Bahasa saat ini: {flag} {language}"),
    ("language.changed", "Bahasa diubah menjadi {flag} {language}"),
    ("language.placeholder", "🌐 Pilih Bahasa..."),
    // help
    ("help.title", "📚 Bantuan {name}"),
    ("help.description", "Pilih kategori di bawah untuk melihat daftar perintah."),
    ("help.placeholder", "📂 Pilih Kategori..."),
    ("help.commands", "perintah"),
    ("help.column", "Perintah"),
    ("help.prefix_note", "Prefix server ini: `{prefix}`"),
    ("help.cat.anime", "Anime & Manga"),
    ("help.cat.image", "Gambar"),
    ("help.cat.music", "Musik"),
    ("help.cat.indonesia", "Info Indonesia"),
    ("help.cat.utility", "Utilitas"),
    ("help.cat.settings", "Pengaturan"),
    ("help.cmd.anime", "Cari informasi anime"),
    ("help.cmd.manga", "Cari informasi manga"),
    ("help.cmd.character", "Cari karakter anime"),
    ("help.cmd.topanime", "Daftar anime teratas"),
    ("help.cmd.topmanga", "Daftar manga teratas"),
    ("help.cmd.season", "Anime acak dari satu musim tayang"),
    ("help.cmd.randomanime", "Satu anime acak"),
    ("help.cmd.waifu", "Gambar waifu acak, bisa pilih kategori"),
    ("help.cmd.randomwaifu", "Gambar dari kategori acak"),
    ("help.cmd.categories", "Daftar kategori gambar"),
    ("help.cmd.lastfm_set", "Hubungkan akun Last.fm"),
    ("help.cmd.lastfm_np", "Lagu yang sedang diputar"),
    ("help.cmd.lastfm_recent", "Lagu yang baru diputar"),
    ("help.cmd.lastfm_topartists", "Artis teratas"),
    ("help.cmd.lastfm_topalbums", "Album teratas"),
    ("help.cmd.lastfm_album", "Info album dan jumlah putarmu"),
    ("help.cmd.lastfm_artist", "Info artis dan jumlah putarmu"),
    ("help.cmd.sekolah", "Jelajahi sekolah di Indonesia"),
    ("help.cmd.imsakiyah", "Jadwal imsakiyah per kota"),
    ("help.cmd.ping", "Cek latensi bot"),
    ("help.cmd.help", "Tampilkan bantuan ini"),
    ("help.cmd.info", "Informasi tentang bot"),
    ("help.cmd.stats", "Statistik penggunaan (pemilik bot)"),
    ("help.cmd.prefix", "Lihat atau ubah prefix server"),
    ("help.cmd.language", "Lihat atau ubah bahasa server"),
    // waifu
    ("waifu.unknown_category", "Kategori `{category}` tidak dikenal. Lihat `/categories`."),
    ("waifu.categories_title", "🖼️ Kategori Gambar"),
    ("waifu.categories_footer", "Gunakan /waifu <kategori>"),
    ("waifu.fetch_failed", "Gagal mengambil gambar. Silakan coba lagi nanti."),
    // anime
    ("anime.not_found", "Tidak ada hasil untuk '{query}'."),
    ("anime.score", "Skor"),
    ("anime.episodes", "Episode"),
    ("anime.chapters", "Chapter"),
    ("anime.status", "Status"),
    ("anime.favorites", "Favorit"),
    ("anime.top_title", "🏆 Anime Teratas"),
    ("anime.top_manga_title", "🏆 Manga Teratas"),
    ("anime.season_title", "📅 Anime Musim {season} {year}"),
    ("anime.season_empty", "Tidak ada anime di musim ini."),
    ("anime.invalid_year", "Tahun harus antara {min} dan {max}."),
    // lastfm
    ("lastfm.not_configured", "Fitur Last.fm belum dikonfigurasi di bot ini."),
    ("lastfm.linked", "Akun Last.fm terhubung: **{username}**"),
    ("lastfm.not_linked", "Hubungkan akunmu dulu dengan `/lastfm set`."),
    ("lastfm.user_not_found", "Pengguna Last.fm **{username}** tidak ditemukan."),
    ("lastfm.now_playing", "🎧 Sedang Diputar"),
    ("lastfm.last_played", "🎵 Terakhir Diputar"),
    ("lastfm.recent_title", "🕒 Lagu Terbaru {username}"),
    ("lastfm.top_artists", "🎤 Artis Teratas {username}"),
    ("lastfm.top_albums", "💿 Album Teratas {username}"),
    ("lastfm.no_tracks", "Belum ada lagu yang tercatat."),
    ("lastfm.plays", "{count} kali diputar"),
    ("lastfm.listeners", "{count} pendengar"),
    ("lastfm.track_count", "{count} lagu"),
    ("lastfm.no_album_plays", "Kamu belum mendengarkan album `{album}` oleh `{artist}` sama sekali!"),
    ("lastfm.no_artist_plays", "Kamu belum mendengarkan `{artist}` sama sekali!"),
    ("lastfm.album_not_found", "Album '{query}' tidak ditemukan."),
    ("lastfm.artist_not_found", "Artis '{query}' tidak ditemukan."),
    ("lastfm.invalid_period", "Periode tidak valid. Pilih: overall, 7day, 1month, 3month, 6month, 12month."),
    // sekolah
    ("sekolah.noun", "sekolah"),
    ("sekolah.column", "Sekolah"),
    ("sekolah.tip_navigate", "💡 Gunakan tombol navigasi untuk melihat hasil lainnya"),
    ("sekolah.tip_npsn", "🔍 Coba cari dengan NPSN untuk hasil lebih spesifik"),
    ("sekolah.tip_detail", "📱 Informasi kontak tersedia di detail sekolah"),
    ("sekolah.search_intro", "Hasil pencarian untuk **{query}**"),
    ("sekolah.root_title", "🏫 Info Sekolah Indonesia"),
    ("sekolah.root_body", "Pilih jenis sekolah dari menu di bawah untuk melihat daftar sekolah.\n\n**Perintah lain:**\n`/sekolah nama <nama>` - Cari sekolah berdasarkan nama\n`/sekolah npsn <npsn>` - Detail sekolah berdasarkan NPSN"),
    ("sekolah.select_placeholder", "🎓 Pilih Jenis Sekolah..."),
    ("sekolah.detail_title", "{icon} Detail Sekolah"),
    ("sekolah.detail_name", "📝 Nama Sekolah"),
    ("sekolah.detail_basics_title", "ℹ️ Informasi Dasar"),
    ("sekolah.detail_basics", "Status: {status}\nJenis : {kind}\nNPSN  : {npsn}"),
    ("sekolah.detail_location_title", "📍 Lokasi"),
    ("sekolah.detail_location", "Alamat   : {address}\nKecamatan: {district}\nKota     : {city}\nProvinsi : {province}"),
    ("sekolah.not_found_name", "Tidak ditemukan sekolah dengan nama '{query}'."),
    ("sekolah.not_found_npsn", "Sekolah dengan NPSN `{npsn}` tidak ditemukan."),
    // imsakiyah
    ("imsakiyah.noun", "kota"),
    ("imsakiyah.column", "Kota"),
    ("imsakiyah.region_label", "{emoji} Kota di {region}"),
    ("imsakiyah.results_label", "🔍 Hasil Pencarian: '{term}'"),
    ("imsakiyah.view_intro", "Gunakan `/imsakiyah kota <nama>` untuk melihat jadwal hari ini."),
    ("imsakiyah.menu_title", "🕌 Jadwal Imsakiyah Ramadhan 1445H"),
    ("imsakiyah.menu_body", "Pilih wilayah dari menu di bawah untuk melihat daftar kota ({total} kota).\n\n`/imsakiyah kota <nama>` - Jadwal hari ini\n`/imsakiyah cari <kata kunci>` - Cari kota"),
    ("imsakiyah.menu_more", "dan {count} kota lainnya"),
    ("imsakiyah.city_count", "{count} kota"),
    ("imsakiyah.timezone_note", "Waktu dalam WIB kecuali disebutkan lain"),
    ("imsakiyah.select_placeholder", "📍 Pilih Wilayah..."),
    ("imsakiyah.modal_title", "🔍 Cari Kota"),
    ("imsakiyah.modal_label", "Nama Kota"),
    ("imsakiyah.modal_placeholder", "Contoh: Bandung"),
    ("imsakiyah.no_match", "❌ Tidak ada kota yang cocok dengan '{query}'."),
    ("imsakiyah.no_match_region", "❌ Tidak ada kota yang cocok dengan '{query}' di wilayah {region}."),
    ("imsakiyah.not_available", "Jadwal untuk {city} hari ini belum tersedia."),
    ("imsakiyah.schedule_title", "📆 Jadwal Imsakiyah {city}"),
    ("imsakiyah.schedule_for", "Jadwal untuk {date}"),
    ("imsakiyah.fallback_note", "⚠️ Data perkiraan, sumber jadwal sedang tidak tersedia."),
];

pub(super) const EN: &[(&str, &str)] = &[
    // paging
    ("paging.page", "Page"),
    ("paging.of", "of"),
    ("paging.search", "Search"),
    ("paging.home", "Back"),
    ("paging.layout", "Layout"),
    ("paging.layout_columns", "Two Columns"),
    ("paging.layout_list", "List View"),
    ("paging.empty", "*No items*"),
    // common
    ("common.error_title", "Something Went Wrong"),
    ("common.error_body", "Failed to process the command. Please try again later."),
    ("common.unavailable", "The service is unavailable right now. Please try again later."),
    ("common.guild_only", "This command can only be used inside a server."),
    ("common.no_permission", "You need the **Manage Server** permission for this command."),
    ("common.owner_only", "This command is for the bot owner only."),
    ("common.expired", "This view has expired. Run the command again."),
    ("common.unknown_command", "Unknown command."),
    // cooldown
    ("cooldown.title", "Slow Down"),
    ("cooldown.wait", "Please wait {seconds}s before using this command again."),
    // utility
    ("ping.response", "🏓 Pong! Latency: {latency} ms"),
    ("info.title", "ℹ️ About {name}"),
    ("info.version", "Version"),
    ("info.uptime", "Uptime"),
    ("info.servers", "Servers"),
    ("info.commands", "Commands Run"),
    ("info.source", "Source Code"),
    ("stats.title", "📊 Usage Statistics"),
    ("stats.total", "Total Commands"),
    ("stats.users", "Unique Users"),
    ("stats.top", "Top Commands"),
    ("stats.none", "No data yet"),
    // settings
    ("prefix.current", "Current prefix: `{prefix}`"),
    ("prefix.changed", "Prefix changed to `{prefix}`"),
    ("prefix.invalid", "A prefix must be 1-5 characters with no spaces."),
    ("language.current", "Current language: {flag} {language}"),
    ("language.changed", "Language changed to {flag} {language}"),
    ("language.placeholder", "🌐 Choose a Language..."),
    // help
    ("help.title", "📚 {name} Help"),
    ("help.description", "Pick a category below to list its commands."),
    ("help.placeholder", "📂 Choose a Category..."),
    ("help.commands", "commands"),
    ("help.column", "Commands"),
    ("help.prefix_note", "This server's prefix: `{prefix}`"),
    ("help.cat.anime", "Anime & Manga"),
    ("help.cat.image", "Images"),
    ("help.cat.music", "Music"),
    ("help.cat.indonesia", "Indonesia Info"),
    ("help.cat.utility", "Utility"),
    ("help.cat.settings", "Settings"),
    ("help.cmd.anime", "Look up an anime"),
    ("help.cmd.manga", "Look up a manga"),
    ("help.cmd.character", "Look up an anime character"),
    ("help.cmd.topanime", "List the top-rated anime"),
    ("help.cmd.topmanga", "List the top-rated manga"),
    ("help.cmd.season", "Random picks from an anime season"),
    ("help.cmd.randomanime", "One random anime"),
    ("help.cmd.waifu", "Random waifu image, optionally by category"),
    ("help.cmd.randomwaifu", "Image from a random category"),
    ("help.cmd.categories", "List image categories"),
    ("help.cmd.lastfm_set", "Link your Last.fm account"),
    ("help.cmd.lastfm_np", "Currently playing track"),
    ("help.cmd.lastfm_recent", "Recently played tracks"),
    ("help.cmd.lastfm_topartists", "Top artists"),
    ("help.cmd.lastfm_topalbums", "Top albums"),
    ("help.cmd.lastfm_album", "Album info with your play count"),
    ("help.cmd.lastfm_artist", "Artist info with your play count"),
    ("help.cmd.sekolah", "Browse schools in Indonesia"),
    ("help.cmd.imsakiyah", "Imsakiyah schedule per city"),
    ("help.cmd.ping", "Check bot latency"),
    ("help.cmd.help", "Show this help"),
    ("help.cmd.info", "About the bot"),
    ("help.cmd.stats", "Usage statistics (bot owner)"),
    ("help.cmd.prefix", "View or change the server prefix"),
    ("help.cmd.language", "View or change the server language"),
    // waifu
    ("waifu.unknown_category", "Unknown category `{category}`. See `/categories`."),
    ("waifu.categories_title", "🖼️ Image Categories"),
    ("waifu.categories_footer", "Use /waifu <category>"),
    ("waifu.fetch_failed", "Could not fetch an image. Please try again later."),
    // anime
    ("anime.not_found", "No results for '{query}'."),
    ("anime.score", "Score"),
    ("anime.episodes", "Episodes"),
    ("anime.chapters", "Chapters"),
    ("anime.status", "Status"),
    ("anime.favorites", "Favorites"),
    ("anime.top_title", "🏆 Top Anime"),
    ("anime.top_manga_title", "🏆 Top Manga"),
    ("anime.season_title", "📅 Anime Season: {season} {year}"),
    ("anime.season_empty", "No anime in this season."),
    ("anime.invalid_year", "Year must be between {min} and {max}."),
    // lastfm
    ("lastfm.not_configured", "Last.fm is not configured on this bot."),
    ("lastfm.linked", "Linked Last.fm account: **{username}**"),
    ("lastfm.not_linked", "Link your account first with `/lastfm set`."),
    ("lastfm.user_not_found", "Last.fm user **{username}** was not found."),
    ("lastfm.now_playing", "🎧 Now Playing"),
    ("lastfm.last_played", "🎵 Last Played"),
    ("lastfm.recent_title", "🕒 Recent Tracks for {username}"),
    ("lastfm.top_artists", "🎤 Top Artists for {username}"),
    ("lastfm.top_albums", "💿 Top Albums for {username}"),
    ("lastfm.no_tracks", "No scrobbles yet."),
    ("lastfm.plays", "{count} plays"),
    ("lastfm.listeners", "{count} listeners"),
    ("lastfm.track_count", "{count} tracks"),
    ("lastfm.no_album_plays", "You haven't listened to `{album}` by `{artist}` at all!"),
    ("lastfm.no_artist_plays", "You haven't listened to `{artist}` at all!"),
    ("lastfm.album_not_found", "No album found for '{query}'."),
    ("lastfm.artist_not_found", "No artist found for '{query}'."),
    ("lastfm.invalid_period", "Invalid period. Choose: overall, 7day, 1month, 3month, 6month, 12month."),
    // sekolah
    ("sekolah.noun", "schools"),
    ("sekolah.column", "School"),
    ("sekolah.tip_navigate", "💡 Use the navigation buttons to see more results"),
    ("sekolah.tip_npsn", "🔍 Search by NPSN for a more specific result"),
    ("sekolah.tip_detail", "📱 Contact details are in the school detail"),
    ("sekolah.search_intro", "Search results for **{query}**"),
    ("sekolah.root_title", "🏫 Indonesian School Directory"),
    ("sekolah.root_body", "Pick a school type from the menu below to list its schools.\n\n**Other commands:**\n`/sekolah nama <name>` - Search schools by name\n`/sekolah npsn <npsn>` - School detail by NPSN"),
    ("sekolah.select_placeholder", "🎓 Choose a school type..."),
    ("sekolah.detail_title", "{icon} School Detail"),
    ("sekolah.detail_name", "📝 School Name"),
    ("sekolah.detail_basics_title", "ℹ️ Basic Information"),
    ("sekolah.detail_basics", "Status: {status}\nType  : {kind}\nNPSN  : {npsn}"),
    ("sekolah.detail_location_title", "📍 Location"),
    ("sekolah.detail_location", "Address : {address}\nDistrict: {district}\nCity    : {city}\nProvince: {province}"),
    ("sekolah.not_found_name", "No school found with the name '{query}'."),
    ("sekolah.not_found_npsn", "No school found with NPSN `{npsn}`."),
    // imsakiyah
    ("imsakiyah.noun", "cities"),
    ("imsakiyah.column", "City"),
    ("imsakiyah.region_label", "{emoji} Cities in {region}"),
    ("imsakiyah.results_label", "🔍 Search Results: '{term}'"),
    ("imsakiyah.view_intro", "Use `/imsakiyah kota <name>` to see today's schedule."),
    ("imsakiyah.menu_title", "🕌 Ramadan 1445H Imsakiyah Schedule"),
    ("imsakiyah.menu_body", "Pick a region from the menu below to list its cities ({total} cities).\n\n`/imsakiyah kota <name>` - Today's schedule\n`/imsakiyah cari <keyword>` - Find a city"),
    ("imsakiyah.menu_more", "and {count} more cities"),
    ("imsakiyah.city_count", "{count} cities"),
    ("imsakiyah.timezone_note", "Times are in WIB unless stated otherwise"),
    ("imsakiyah.select_placeholder", "📍 Choose a region..."),
    ("imsakiyah.modal_title", "🔍 Find a City"),
    ("imsakiyah.modal_label", "City Name"),
    ("imsakiyah.modal_placeholder", "Example: Bandung"),
    ("imsakiyah.no_match", "❌ No city matches '{query}'."),
    ("imsakiyah.no_match_region", "❌ No city matches '{query}' in {region}."),
    ("imsakiyah.not_available", "Today's schedule for {city} is not available yet."),
    ("imsakiyah.schedule_title", "📆 Imsakiyah Schedule for {city}"),
    ("imsakiyah.schedule_for", "Schedule for {date}"),
    ("imsakiyah.fallback_note", "⚠️ Estimated times, the schedule source is unavailable."),
];
