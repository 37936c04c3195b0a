//! The single-page frontend, served inline.

use axum::response::Html;

/// Handle GET / - return the upload page.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Upload form with live re-rendering. The image is uploaded once to
/// `/api/images`; every control change fetches a new render of the stored copy.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Halftoner</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            background: #f4f4f4;
            color: #222;
            padding: 24px;
        }
        .container { max-width: 960px; margin: 0 auto; }
        h1 { font-size: 24px; margin-bottom: 16px; }
        .controls {
            display: flex;
            flex-wrap: wrap;
            gap: 16px;
            align-items: center;
            background: #fff;
            padding: 16px;
            border-radius: 8px;
            margin-bottom: 16px;
        }
        label { font-size: 14px; display: flex; gap: 8px; align-items: center; }
        #status { font-size: 13px; color: #666; }
        #preview { max-width: 100%; background: #fff; display: none; }
        a.button {
            background: #222;
            color: #fff;
            padding: 8px 14px;
            border-radius: 4px;
            text-decoration: none;
            font-size: 14px;
        }
        a.button[hidden] { display: none; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Halftoner</h1>
        <div class="controls">
            <input type="file" id="file" accept="image/*">
            <label>Cell size
                <input type="range" id="cell_size" min="2" max="40" value="10">
                <span id="cell_size_value">10</span>
            </label>
            <label>Pattern <select id="pattern"></select></label>
            <label><input type="checkbox" id="rotate"> Rotate</label>
            <a class="button" id="download" hidden>Download</a>
        </div>
        <p id="status">Choose or paste an image.</p>
        <img id="preview" alt="halftone preview">
    </div>
    <script>
        const $ = (id) => document.getElementById(id);
        let imageId = null;
        let pending = null;

        fetch('/api/patterns')
            .then((r) => r.json())
            .then((patterns) => {
                for (const p of patterns) {
                    const opt = document.createElement('option');
                    opt.value = p.name;
                    opt.textContent = p.name;
                    $('pattern').appendChild(opt);
                }
            });

        function query(download) {
            const params = new URLSearchParams({
                cell_size: $('cell_size').value,
                pattern: $('pattern').value,
                rotate: $('rotate').checked,
            });
            if (download) params.set('download', 'true');
            return `/api/images/${imageId}/halftone?${params}`;
        }

        function refresh() {
            $('cell_size_value').textContent = $('cell_size').value;
            if (!imageId) return;
            clearTimeout(pending);
            pending = setTimeout(() => {
                $('preview').src = query(false);
                $('preview').style.display = 'block';
                $('download').href = query(true);
                $('download').hidden = false;
            }, 120);
        }

        async function upload(file) {
            const body = new FormData();
            body.append('image', file);
            $('status').textContent = 'Uploading...';
            const res = await fetch('/api/images', { method: 'POST', body });
            if (!res.ok) {
                $('status').textContent = await res.text();
                return;
            }
            const info = await res.json();
            imageId = info.id;
            $('status').textContent = `${info.width} x ${info.height}`;
            refresh();
        }

        $('file').addEventListener('change', (e) => {
            if (e.target.files[0]) upload(e.target.files[0]);
        });
        document.addEventListener('paste', (e) => {
            const item = [...e.clipboardData.items].find((i) => i.type.startsWith('image/'));
            if (item) upload(item.getAsFile());
        });
        for (const id of ['cell_size', 'pattern', 'rotate']) {
            $(id).addEventListener('input', refresh);
            $(id).addEventListener('change', refresh);
        }
    </script>
</body>
</html>"#;
